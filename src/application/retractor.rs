//! Banner Retractor
//!
//! Clears every file a banner could live in, without knowing which campaign
//! class was deployed, then restarts once and purges derived layouts once.

use tracing::info;

use crate::domain::services::target_paths;
use crate::domain::value_objects::{Application, TargetMode};
use crate::error::BannerResult;

use super::pipeline::BannerPipeline;

pub struct BannerRetractor<'p, 'a> {
    pipeline: &'p BannerPipeline<'a>,
}

impl<'p, 'a> BannerRetractor<'p, 'a> {
    pub fn new(pipeline: &'p BannerPipeline<'a>) -> Self {
        Self { pipeline }
    }

    /// Empty the banner of `application` on every host
    pub fn retract(&self, application: Application, hosts: &[String]) -> BannerResult<()> {
        let targets = target_paths(application, TargetMode::Remove);
        for host in hosts {
            info!(%application, host = %host, files = targets.len(), "removing banner");
            for path in &targets {
                self.pipeline.write_file(application, host, path, "")?;
            }
            self.pipeline.restart(application, host)?;
            self.pipeline.purge_derived_cache(application, host)?;
        }
        Ok(())
    }
}
