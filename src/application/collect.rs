//! Campaign Context Collection

use tracing::debug;

use crate::domain::entities::CampaignContext;
use crate::domain::ports::Prompter;
use crate::domain::value_objects::CampaignClass;
use crate::error::BannerResult;

/// Ask the operator for the four campaign fields
///
/// The class is validated immediately; an invalid answer fails the whole
/// collection, so no remote work starts with a half-valid campaign.
pub fn collect_campaign(prompter: &dyn Prompter) -> BannerResult<CampaignContext> {
    let heading = prompter.ask("Heading:", "heading")?;
    let extra_info = prompter.ask("Short description:", "extra_info")?;
    let more_info_url = prompter.ask("More info link:", "more_info_url")?;
    let class_question = format!(
        "Campaign class (one of {}):",
        CampaignClass::allowed_values()
    );
    let campaign_class = prompter
        .ask(&class_question, "campaign_class")?
        .parse::<CampaignClass>()?;

    let context = CampaignContext::new(heading, extra_info, more_info_url.trim(), campaign_class);
    debug!(
        heading = context.heading(),
        extra_info = context.extra_info(),
        more_info_url = context.more_info_url(),
        class = %context.campaign_class(),
        "campaign collected"
    );
    Ok(context)
}
