//! Terminal and CI output

pub mod error;
pub mod events;
pub mod json;
pub mod theme;

use is_terminal::IsTerminal;

use crate::cli::ColorWhen;
use theme::Style;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub style: Style,
}

impl UiContext {
    pub fn new(json: bool, color: Option<ColorWhen>) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let dumb = std::env::var("TERM").is_ok_and(|t| t == "dumb");
        Self::from_caps(json, color, is_tty, no_color, dumb)
    }

    pub(crate) fn from_caps(
        json: bool,
        color: Option<ColorWhen>,
        is_tty: bool,
        no_color: bool,
        dumb_term: bool,
    ) -> Self {
        let color = match color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => is_tty && !no_color && !dumb_term,
        };
        Self {
            json,
            style: Style {
                color: color && !json,
                unicode: is_tty && !dumb_term,
            },
        }
    }
}
