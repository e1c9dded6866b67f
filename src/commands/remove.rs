//! remove-emergency-banner

use anyhow::Result;

use emergency_banner::{remove_emergency_banner, BannerPipeline};

pub fn cmd_remove(hosts: &[String], pipeline: &BannerPipeline<'_>) -> Result<()> {
    remove_emergency_banner(hosts, pipeline)?;
    Ok(())
}
