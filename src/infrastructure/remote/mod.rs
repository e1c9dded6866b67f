//! Remote adapters
//!
//! RemoteChannel implementations (SSH, dry run) and the restart adapter
//! built on top of them.

mod dry_run;
mod lifecycle;
mod ssh;

pub use dry_run::DryRunChannel;
pub use lifecycle::{CommandLifecycle, APP_PLACEHOLDER, DEFAULT_RESTART_COMMAND};
pub use ssh::SshChannel;
