//! Top-level operator operations
//!
//! Both visit `static` before `frontend` and stop at the first failure; the
//! second application is never attempted after the first fails.

use tracing::info;

use crate::domain::ports::{BannerEvent, Prompter};
use crate::domain::value_objects::{Application, Operation};
use crate::error::BannerResult;

use super::collect::collect_campaign;
use super::pipeline::BannerPipeline;
use super::publisher::BannerPublisher;
use super::retractor::BannerRetractor;

/// Collect a campaign once, then publish it to every application
pub fn deploy_emergency_banner(
    prompter: &dyn Prompter,
    hosts: &[String],
    pipeline: &BannerPipeline<'_>,
) -> BannerResult<()> {
    let context = collect_campaign(prompter)?;
    info!(class = %context.campaign_class(), hosts = hosts.len(), "deploying emergency banner");

    pipeline.emit(BannerEvent::Started {
        operation: Operation::Deploy,
        hosts: hosts.to_vec(),
    });
    let publisher = BannerPublisher::new(pipeline);
    for application in Application::ALL {
        publisher.publish(application, hosts, &context)?;
    }
    pipeline.emit(BannerEvent::Completed {
        operation: Operation::Deploy,
        applications: Application::ALL.len(),
        hosts: hosts.len(),
    });
    Ok(())
}

/// Clear the banner from every application
pub fn remove_emergency_banner(hosts: &[String], pipeline: &BannerPipeline<'_>) -> BannerResult<()> {
    info!(hosts = hosts.len(), "removing emergency banner");

    pipeline.emit(BannerEvent::Started {
        operation: Operation::Remove,
        hosts: hosts.to_vec(),
    });
    let retractor = BannerRetractor::new(pipeline);
    for application in Application::ALL {
        retractor.retract(application, hosts)?;
    }
    pipeline.emit(BannerEvent::Completed {
        operation: Operation::Remove,
        applications: Application::ALL.len(),
        hosts: hosts.len(),
    });
    Ok(())
}
