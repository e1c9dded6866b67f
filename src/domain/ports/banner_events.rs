//! Banner Event Port
//!
//! Provides an observable interface for deploy and remove operations.
//! Enables progress reporting and JSON event streams.

use crate::domain::value_objects::{Application, Operation, PipelineStep};

/// Event emitted while publishing or retracting a banner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BannerEvent {
    /// Operation started against `hosts`
    Started {
        operation: Operation,
        hosts: Vec<String>,
    },

    /// Fragment rendered for an application
    Rendered { application: Application, bytes: usize },

    /// Remote step started; `target` is the file it acts on, if any
    StepStarted {
        application: Application,
        host: String,
        step: PipelineStep,
        target: Option<String>,
    },

    /// Remote step finished successfully
    StepCompleted {
        application: Application,
        host: String,
        step: PipelineStep,
        target: Option<String>,
    },

    /// Remote step failed; the pipeline stops after this event
    StepFailed {
        application: Application,
        host: String,
        step: PipelineStep,
        error: String,
    },

    /// Every application finished on every host
    Completed {
        operation: Operation,
        applications: usize,
        hosts: usize,
    },
}

/// Trait for receiving banner events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BannerEventSink {
    /// Handle a banner event
    fn on_event(&self, event: BannerEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BannerEventSink for NoopEventSink {
    fn on_event(&self, _event: BannerEvent) {}
}
