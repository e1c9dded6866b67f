//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports:
//!
//! - `remote` - SSH and dry-run channels, command-based restarts
//! - `prompt` - dialoguer and pre-seeded prompters
//! - `hosts` - role registries

pub mod hosts;
pub mod prompt;
pub mod remote;

pub use hosts::{ConfigHostRegistry, FixedHosts};
pub use prompt::{DialoguerPrompter, PresetPrompter};
pub use remote::{CommandLifecycle, DryRunChannel, SshChannel};
