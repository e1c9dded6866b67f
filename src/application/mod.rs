//! Application Layer
//!
//! Use cases that orchestrate domain services through ports.
//!
//! - `collect` - Gather the campaign from the operator
//! - `pipeline` - Remote steps shared by publish and retract
//! - `publisher` / `retractor` - Per-application banner lifecycle
//! - `operations` - The two operator commands

mod collect;
mod operations;
mod pipeline;
mod publisher;
mod retractor;


pub use collect::collect_campaign;
pub use operations::{deploy_emergency_banner, remove_emergency_banner};
pub use pipeline::{BannerPipeline, PipelineOptions};
pub use publisher::BannerPublisher;
pub use retractor::BannerRetractor;
