//! Terminal capability detection and styling

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// How status lines are styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    /// Colored if stdout supports it, plain otherwise.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            color: supports_color(),
        }
    }

    /// Never colored.
    #[must_use]
    pub const fn plain() -> Self {
        Self { color: false }
    }

    /// Color as success (green)
    #[must_use]
    pub fn success(self, text: &str) -> String {
        if self.color {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as warning (amber)
    #[must_use]
    pub fn warning(self, text: &str) -> String {
        if self.color {
            text.fg::<css::Orange>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as failure (red)
    #[must_use]
    pub fn failure(self, text: &str) -> String {
        if self.color {
            text.fg::<css::Red>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dim the text
    #[must_use]
    pub fn dim(self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
