//! Value Objects
//!
//! Immutable, closed types with no identity.

mod application;
mod campaign_class;
mod pipeline;

pub use application::Application;
pub use campaign_class::CampaignClass;
pub use pipeline::{Operation, PipelineStep, TargetMode};
