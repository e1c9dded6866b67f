//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod banner_events;
pub mod host_registry;
pub mod process_lifecycle;
pub mod prompt;
pub mod remote_channel;

pub use banner_events::{BannerEvent, BannerEventSink, NoopEventSink};
pub use host_registry::HostRegistry;
pub use process_lifecycle::ProcessLifecycle;
pub use prompt::Prompter;
pub use remote_channel::{shell_quote, RemoteChannel, RemoteError, UploadOptions};
