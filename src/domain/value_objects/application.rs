//! Application value object - which front-end application receives a banner

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BannerError;

/// A front-end application that carries an emergency banner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Application {
    /// Serves the shared layout templates fetched by other applications
    Static,
    /// Serves the homepage
    Frontend,
}

impl Application {
    /// Every application, in the order deploy and remove visit them
    pub const ALL: [Application; 2] = [Application::Static, Application::Frontend];

    /// Name used for the service on the remote host
    pub fn name(&self) -> &'static str {
        match self {
            Application::Static => "static",
            Application::Frontend => "frontend",
        }
    }

    /// Whether the application serves derived layouts that must be purged
    /// after its banner changes
    pub fn has_derived_cache(&self) -> bool {
        matches!(self, Application::Static)
    }

    fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|a| a.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Application {
    type Err = BannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| BannerError::UnsupportedApplication {
                name: s.to_string(),
                allowed: Self::allowed_values(),
            })
    }
}

impl std::fmt::Display for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
