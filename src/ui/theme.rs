//! Demo Theme System
//!
//! Color themes for terminal output. Themes are plain values handed to the
//! [`Styler`](super::style::Styler); nothing here is process-global.

use colored::Color;
use std::str::FromStr;

/// Theme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeId {
    /// Bright ANSI palette
    #[default]
    Classic,
    /// No colors, weight only
    Mono,
}

impl FromStr for ThemeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classic" => Ok(ThemeId::Classic),
            "mono" | "monochrome" => Ok(ThemeId::Mono),
            other => Err(format!(
                "unknown theme '{}' (expected 'classic' or 'mono')",
                other
            )),
        }
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeId::Classic => write!(f, "classic"),
            ThemeId::Mono => write!(f, "mono"),
        }
    }
}

/// A complete color theme. `None` leaves the terminal's default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    /// Banners and section headers
    pub title: Option<Color>,
    /// Numbered workflow steps
    pub step: Option<Color>,
    /// Agent names, commands, insight labels
    pub accent: Option<Color>,
    pub success: Option<Color>,
    pub warning: Option<Color>,
    pub error: Option<Color>,
}

impl ThemeColors {
    pub const CLASSIC: ThemeColors = ThemeColors {
        title: Some(Color::BrightMagenta),
        step: Some(Color::BrightBlue),
        accent: Some(Color::BrightCyan),
        success: Some(Color::BrightGreen),
        warning: Some(Color::BrightYellow),
        error: Some(Color::BrightRed),
    };

    pub const MONO: ThemeColors = ThemeColors {
        title: None,
        step: None,
        accent: None,
        success: None,
        warning: None,
        error: None,
    };

    pub fn from_id(id: ThemeId) -> Self {
        match id {
            ThemeId::Classic => Self::CLASSIC,
            ThemeId::Mono => Self::MONO,
        }
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::CLASSIC
    }
}
