//! deploy-emergency-banner

use anyhow::Result;

use emergency_banner::deploy_emergency_banner;
use emergency_banner::infrastructure::{DialoguerPrompter, PresetPrompter};
use emergency_banner::BannerPipeline;

use crate::cli::DeployArgs;

pub fn cmd_deploy(args: &DeployArgs, hosts: &[String], pipeline: &BannerPipeline<'_>) -> Result<()> {
    let interactive = DialoguerPrompter::new();
    let prompter = PresetPrompter::new(&interactive)
        .with_answer("heading", args.heading.as_deref())
        .with_answer("extra_info", args.extra_info.as_deref())
        .with_answer("more_info_url", args.more_info_url.as_deref())
        .with_answer("campaign_class", args.campaign_class.as_deref());

    deploy_emergency_banner(&prompter, hosts, pipeline)?;
    Ok(())
}
