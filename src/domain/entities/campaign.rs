//! Campaign context - the operator-supplied content of one banner

use serde::Serialize;

use crate::domain::value_objects::CampaignClass;

/// Everything needed to render one emergency banner
///
/// Built once per deploy invocation and shared read-only by every
/// application's pipeline. Fields hold raw operator input; escaping
/// happens at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CampaignContext {
    heading: String,
    extra_info: String,
    more_info_url: String,
    campaign_class: CampaignClass,
}

impl CampaignContext {
    pub fn new(
        heading: impl Into<String>,
        extra_info: impl Into<String>,
        more_info_url: impl Into<String>,
        campaign_class: CampaignClass,
    ) -> Self {
        Self {
            heading: heading.into(),
            extra_info: extra_info.into(),
            more_info_url: more_info_url.into(),
            campaign_class,
        }
    }

    pub fn heading(&self) -> &str {
        &self.heading
    }

    pub fn extra_info(&self) -> &str {
        &self.extra_info
    }

    /// Link target, empty when the banner has no "More information" link
    pub fn more_info_url(&self) -> &str {
        &self.more_info_url
    }

    pub fn campaign_class(&self) -> CampaignClass {
        self.campaign_class
    }

    pub fn has_more_info(&self) -> bool {
        !self.more_info_url.is_empty()
    }
}
