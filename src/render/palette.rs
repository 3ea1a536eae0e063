//! Display color palette.

use colored::{Color, Colorize};

/// Immutable colors for the art, header and labels
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub art: Option<Color>,
    pub header: Option<Color>,
    pub label: Option<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            art: Some(Color::BrightCyan),
            header: Some(Color::BrightWhite),
            label: Some(Color::BrightBlue),
        }
    }
}

impl Palette {
    /// No escape codes at all
    pub const fn plain() -> Self {
        Self {
            art: None,
            header: None,
            label: None,
        }
    }

    pub(crate) fn art(&self, text: &str) -> String {
        match self.art {
            Some(color) => text.color(color).to_string(),
            None => text.to_string(),
        }
    }

    pub(crate) fn header(&self, text: &str) -> String {
        match self.header {
            Some(color) => text.color(color).bold().to_string(),
            None => text.to_string(),
        }
    }

    pub(crate) fn label(&self, text: &str) -> String {
        match self.label {
            Some(color) => text.color(color).bold().to_string(),
            None => text.to_string(),
        }
    }
}
