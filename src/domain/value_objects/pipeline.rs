//! Pipeline value objects - operation modes and the steps a banner goes through

use serde::Serialize;

use super::CampaignClass;

/// Which side of the banner lifecycle a path lookup is for
///
/// Deploying knows the class being written. Removing does not, since the
/// class of a previously deployed banner is never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    Deploy(CampaignClass),
    Remove,
}

/// One remote step of the publish/retract pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineStep {
    Upload,
    Chown,
    Restart,
    PurgeCache,
}

impl PipelineStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStep::Upload => "upload",
            PipelineStep::Chown => "chown",
            PipelineStep::Restart => "restart",
            PipelineStep::PurgeCache => "purge cache",
        }
    }
}

impl std::fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level operator command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Deploy,
    Remove,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Deploy => f.write_str("deploy"),
            Operation::Remove => f.write_str("remove"),
        }
    }
}
