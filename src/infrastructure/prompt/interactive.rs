//! Interactive prompter backed by dialoguer

use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use is_terminal::IsTerminal;

use crate::domain::ports::Prompter;
use crate::error::{BannerError, BannerResult};

/// Asks on the terminal; refuses to block when stdin is not a TTY
#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&self, question: &str, key: &str) -> BannerResult<String> {
        if !std::io::stdin().is_terminal() {
            return Err(BannerError::Prompt {
                key: key.to_string(),
                message: format!(
                    "stdin is not a terminal; pass --{} instead",
                    key.replace('_', "-")
                ),
            });
        }

        // dialoguer appends its own separator
        let prompt = question.trim_end().trim_end_matches(':');
        Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| BannerError::Prompt {
                key: key.to_string(),
                message: e.to_string(),
            })
    }
}
