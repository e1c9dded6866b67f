//! Banner Publisher
//!
//! Per host, strictly in order:
//! 1. Upload the rendered fragment to the application's banner path
//! 2. Hand the file to the deploy owner
//! 3. Restart the application
//! 4. Purge derived layouts (`static` only)
//!
//! The fragment is rendered once up front; rendering is pure, so every host
//! receives identical bytes.

use tracing::info;

use crate::domain::entities::CampaignContext;
use crate::domain::ports::BannerEvent;
use crate::domain::services::{render, target_paths};
use crate::domain::value_objects::{Application, TargetMode};
use crate::error::BannerResult;

use super::pipeline::BannerPipeline;

pub struct BannerPublisher<'p, 'a> {
    pipeline: &'p BannerPipeline<'a>,
}

impl<'p, 'a> BannerPublisher<'p, 'a> {
    pub fn new(pipeline: &'p BannerPipeline<'a>) -> Self {
        Self { pipeline }
    }

    /// Publish `context` to `application` on every host
    pub fn publish(
        &self,
        application: Application,
        hosts: &[String],
        context: &CampaignContext,
    ) -> BannerResult<()> {
        let fragment = render(application, context)?;
        self.pipeline.emit(BannerEvent::Rendered {
            application,
            bytes: fragment.len(),
        });

        let targets = target_paths(application, TargetMode::Deploy(context.campaign_class()));
        for host in hosts {
            info!(%application, host = %host, class = %context.campaign_class(), "publishing banner");
            for path in &targets {
                self.pipeline.write_file(application, host, path, &fragment)?;
            }
            self.pipeline.restart(application, host)?;
            self.pipeline.purge_derived_cache(application, host)?;
        }
        Ok(())
    }
}
