//! Error types for the banner orchestrator
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ports::RemoteError;
use crate::domain::value_objects::{Application, PipelineStep};

/// Result type alias for banner operations
pub type BannerResult<T> = Result<T, BannerError>;

/// Main error type for banner operations
#[derive(Error, Debug)]
pub enum BannerError {
    /// Campaign class outside the closed set
    #[error("invalid campaign class '{value}', valid values are {allowed}")]
    InvalidCampaignClass { value: String, allowed: String },

    /// Application outside the closed set
    #[error("unsupported application '{name}', expected one of {allowed}")]
    UnsupportedApplication { name: String, allowed: String },

    /// Template failed to render
    #[error("failed to render {application} banner: {message}")]
    Template {
        application: Application,
        message: String,
    },

    /// A remote step failed; later steps for this application were not run
    #[error("{step} failed for {application} on {host}: {source}")]
    RemoteStep {
        application: Application,
        host: String,
        step: PipelineStep,
        #[source]
        source: RemoteError,
    },

    /// Role missing from the host registry
    #[error("role '{role}' is not defined; add it under [roles] or pass --hosts")]
    UnknownRole { role: String },

    /// Host entry that ssh would parse as an option
    #[error("invalid host '{host}' in role '{role}': host names cannot start with '-'")]
    InvalidHost { role: String, host: String },

    /// Role defined but empty
    #[error("role '{role}' has no hosts")]
    NoHosts { role: String },

    /// Operator input could not be obtained
    #[error("could not read '{key}': {message}")]
    Prompt { key: String, message: String },

    /// Configuration file is unreadable or invalid
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BannerError {
    /// Remote step at which the operation stopped, if it was a remote failure
    pub fn failed_step(&self) -> Option<(Application, &str, PipelineStep)> {
        match self {
            BannerError::RemoteStep {
                application,
                host,
                step,
                ..
            } => Some((*application, host.as_str(), *step)),
            _ => None,
        }
    }
}
