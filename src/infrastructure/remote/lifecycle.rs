//! Restart applications through the remote channel

use crate::domain::ports::{ProcessLifecycle, RemoteChannel, RemoteError};
use crate::domain::value_objects::Application;

/// Placeholder replaced by the application name in restart templates
pub const APP_PLACEHOLDER: &str = "{app}";

pub const DEFAULT_RESTART_COMMAND: &str = "service {app} restart";

/// Restarts an application by running a command template as root
pub struct CommandLifecycle<'a> {
    channel: &'a dyn RemoteChannel,
    template: String,
}

impl<'a> CommandLifecycle<'a> {
    pub fn new(channel: &'a dyn RemoteChannel, template: impl Into<String>) -> Self {
        Self {
            channel,
            template: template.into(),
        }
    }

    pub fn command_for(&self, application: Application) -> String {
        self.template.replace(APP_PLACEHOLDER, application.name())
    }
}

impl ProcessLifecycle for CommandLifecycle<'_> {
    fn restart(&self, application: Application, host: &str) -> Result<(), RemoteError> {
        self.channel.run_as_sudo(host, &self.command_for(application))
    }
}
