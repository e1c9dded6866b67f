//! Banner Pipeline
//!
//! The remote steps shared by publishing and retracting. Each step emits a
//! started event, runs, and either emits a completed event or maps the
//! failure to [`BannerError::RemoteStep`] naming the step, application and
//! host. Callers stop at the first error.

use tracing::{debug, warn};

use crate::domain::ports::{
    shell_quote, BannerEvent, BannerEventSink, NoopEventSink, ProcessLifecycle, RemoteChannel,
    RemoteError, UploadOptions,
};
use crate::domain::services::cache_paths;
use crate::domain::value_objects::{Application, PipelineStep};
use crate::error::{BannerError, BannerResult};

/// Settings applied to every file the pipeline writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// `user:group` that owns banner files after upload
    pub owner: String,
    /// Mode of the staged upload, mirrored onto the remote file
    pub file_mode: Option<u32>,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            owner: "deploy:deploy".to_string(),
            file_mode: Some(0o644),
        }
    }
}

/// Remote collaborators plus the settings the steps need
pub struct BannerPipeline<'a> {
    channel: &'a dyn RemoteChannel,
    lifecycle: &'a dyn ProcessLifecycle,
    events: &'a dyn BannerEventSink,
    options: PipelineOptions,
}

impl<'a> BannerPipeline<'a> {
    pub fn new(
        channel: &'a dyn RemoteChannel,
        lifecycle: &'a dyn ProcessLifecycle,
        options: PipelineOptions,
    ) -> Self {
        Self {
            channel,
            lifecycle,
            events: &NoopEventSink,
            options,
        }
    }

    /// Report progress to `events`
    pub fn with_events(mut self, events: &'a dyn BannerEventSink) -> Self {
        self.events = events;
        self
    }

    pub(crate) fn emit(&self, event: BannerEvent) {
        self.events.on_event(event);
    }

    /// Upload `content` as the whole of `path`, then hand it to the deploy owner
    pub(crate) fn write_file(
        &self,
        application: Application,
        host: &str,
        path: &str,
        content: &str,
    ) -> BannerResult<()> {
        let upload = UploadOptions {
            use_sudo: true,
            mode: self.options.file_mode,
        };
        self.step(application, host, PipelineStep::Upload, Some(path), || {
            self.channel.upload(host, content, path, &upload)
        })?;

        let chown = format!(
            "chown {} {}",
            shell_quote(&self.options.owner),
            shell_quote(path)
        );
        self.step(application, host, PipelineStep::Chown, Some(path), || {
            self.channel.run_as_sudo(host, &chown)
        })
    }

    pub(crate) fn restart(&self, application: Application, host: &str) -> BannerResult<()> {
        self.step(application, host, PipelineStep::Restart, None, || {
            self.lifecycle.restart(application, host)
        })
    }

    /// Delete the layouts derived from the banner so they regenerate on the next request
    ///
    /// A no-op for applications without a derived cache. Uses `rm -f` rather
    /// than a strict `rm`: a layout that was never generated counts as purged
    /// instead of aborting the run.
    pub(crate) fn purge_derived_cache(
        &self,
        application: Application,
        host: &str,
    ) -> BannerResult<()> {
        let paths = cache_paths(application);
        if paths.is_empty() {
            return Ok(());
        }

        let quoted: Vec<String> = paths.iter().map(|p| shell_quote(p)).collect();
        let command = format!("rm -f {}", quoted.join(" "));
        self.step(application, host, PipelineStep::PurgeCache, None, || {
            self.channel.run_as_sudo(host, &command)
        })
    }

    fn step<F>(
        &self,
        application: Application,
        host: &str,
        step: PipelineStep,
        target: Option<&str>,
        run: F,
    ) -> BannerResult<()>
    where
        F: FnOnce() -> Result<(), RemoteError>,
    {
        debug!(%application, host, %step, path = target, "step started");
        self.emit(BannerEvent::StepStarted {
            application,
            host: host.to_string(),
            step,
            target: target.map(str::to_string),
        });

        if let Err(source) = run() {
            warn!(%application, host, %step, error = %source, "step failed");
            self.emit(BannerEvent::StepFailed {
                application,
                host: host.to_string(),
                step,
                error: source.to_string(),
            });
            return Err(BannerError::RemoteStep {
                application,
                host: host.to_string(),
                step,
                source,
            });
        }

        self.emit(BannerEvent::StepCompleted {
            application,
            host: host.to_string(),
            step,
            target: target.map(str::to_string),
        });
        Ok(())
    }
}
