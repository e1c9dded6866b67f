//! Process Lifecycle Port

use crate::domain::value_objects::Application;

use super::RemoteError;

/// Restarts an application so it picks up a freshly written banner
pub trait ProcessLifecycle {
    fn restart(&self, application: Application, host: &str) -> Result<(), RemoteError>;
}
