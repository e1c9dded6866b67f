//! Emergency banner orchestrator
//!
//! Publishes and retracts the emergency campaign banner on the `static` and
//! `frontend` applications: renders an application-specific fragment from
//! the campaign, uploads it (or an empty replacement) to every host of the
//! frontend role, restarts the applications, and purges the layouts `static`
//! derives from its banner.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    collect_campaign, deploy_emergency_banner, remove_emergency_banner, BannerPipeline,
    BannerPublisher, BannerRetractor, PipelineOptions,
};
pub use config::Config;
pub use domain::entities::CampaignContext;
pub use domain::services::{cache_paths, render, render_named, target_paths};
pub use domain::value_objects::{Application, CampaignClass, Operation, PipelineStep, TargetMode};
pub use error::{BannerError, BannerResult};
