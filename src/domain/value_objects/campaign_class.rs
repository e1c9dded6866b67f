//! Campaign class value object - the visual severity of a banner

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BannerError;

/// Campaign class, rendered as a CSS classifier on the banner container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignClass {
    Red,
    Black,
    Green,
}

impl CampaignClass {
    /// Every accepted class, in the order they are offered to the operator
    pub const ALL: [CampaignClass; 3] = [CampaignClass::Red, CampaignClass::Black, CampaignClass::Green];

    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignClass::Red => "red",
            CampaignClass::Black => "black",
            CampaignClass::Green => "green",
        }
    }

    /// Comma-separated list of accepted values, used in prompts and errors
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for CampaignClass {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .ok_or_else(|| BannerError::InvalidCampaignClass {
                value: value.to_string(),
                allowed: Self::allowed_values(),
            })
    }
}

impl std::fmt::Display for CampaignClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
