use crossterm::style::{Color, Stylize};

/// Design tokens for the CLI output.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const PROGRESS: &str = "●";
    pub const ARROW: &str = "↳";
    pub const DEPLOY: &str = "📦";
    pub const REMOVE: &str = "🧹";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const PROGRESS: &str = "[..]";
    pub const ARROW: &str = "->";
    pub const DEPLOY: &str = "[DEPLOY]";
    pub const REMOVE: &str = "[REMOVE]";
}

/// Semantic icon, resolved to unicode or ASCII at render time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Progress,
    Arrow,
    Deploy,
    Remove,
}

impl Icon {
    pub fn glyph(self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Icon::Success, true) => icons::SUCCESS,
            (Icon::Error, true) => icons::ERROR,
            (Icon::Progress, true) => icons::PROGRESS,
            (Icon::Arrow, true) => icons::ARROW,
            (Icon::Deploy, true) => icons::DEPLOY,
            (Icon::Remove, true) => icons::REMOVE,
            (Icon::Success, false) => icons_ascii::SUCCESS,
            (Icon::Error, false) => icons_ascii::ERROR,
            (Icon::Progress, false) => icons_ascii::PROGRESS,
            (Icon::Arrow, false) => icons_ascii::ARROW,
            (Icon::Deploy, false) => icons_ascii::DEPLOY,
            (Icon::Remove, false) => icons_ascii::REMOVE,
        }
    }

    fn color(self) -> Color {
        match self {
            Icon::Success => colors::SUCCESS,
            Icon::Error => colors::ERROR,
            Icon::Progress | Icon::Deploy | Icon::Remove => colors::INFO,
            Icon::Arrow => colors::DIM,
        }
    }
}

/// Whether and how to style output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub color: bool,
    pub unicode: bool,
}

impl Style {
    #[cfg(test)]
    pub const PLAIN: Style = Style {
        color: false,
        unicode: false,
    };

    pub fn icon(&self, icon: Icon) -> String {
        let glyph = icon.glyph(self.unicode);
        if self.color {
            glyph.with(icon.color()).to_string()
        } else {
            glyph.to_string()
        }
    }

    pub fn dim(&self, text: &str) -> String {
        if self.color {
            text.with(colors::DIM).to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_style_uses_ascii_without_escapes() {
        assert_eq!(Style::PLAIN.icon(Icon::Success), "[OK]");
        assert_eq!(Style::PLAIN.dim("x"), "x");
    }

    #[test]
    fn unicode_without_color() {
        let style = Style {
            color: false,
            unicode: true,
        };
        assert_eq!(style.icon(Icon::Error), "✗");
    }

    #[test]
    fn colored_icon_keeps_glyph() {
        let style = Style {
            color: true,
            unicode: true,
        };
        assert!(style.icon(Icon::Success).contains('✓'));
    }
}
