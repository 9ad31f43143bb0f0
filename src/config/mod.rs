//! Configuration Management
//!
//! Loads presentation settings from an optional TOML file:
//! - Playback pacing (unit delays per mode, per-kind multipliers)
//! - Output styling (color, ASCII glyphs, theme, width)
//!
//! Lookup order: `$WORKFLOW_DEMO_CONFIG`, `./workflow-demo.toml`,
//! `~/.config/workflow-demo/config.toml`, then built-in defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::errors::DemoError;
use crate::narration::{DelayMultipliers, PlaybackConfig, QUICK_DELAY_SECS, STANDARD_DELAY_SECS};
use crate::ui::style::{Glyphs, Styler, DEFAULT_WIDTH};
use crate::ui::theme::{ThemeColors, ThemeId};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "WORKFLOW_DEMO_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub ui: UiConfig,
}

/// Pacing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackSettings {
    /// Unit delay without `--quick`
    #[serde(default = "default_standard_delay")]
    pub standard_delay_secs: f64,
    /// Unit delay with `--quick`
    #[serde(default = "default_quick_delay")]
    pub quick_delay_secs: f64,
    #[serde(default)]
    pub multipliers: DelayMultipliers,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            standard_delay_secs: default_standard_delay(),
            quick_delay_secs: default_quick_delay(),
            multipliers: DelayMultipliers::default(),
        }
    }
}

fn default_standard_delay() -> f64 {
    STANDARD_DELAY_SECS
}
fn default_quick_delay() -> f64 {
    QUICK_DELAY_SECS
}

/// UI configuration for colors, glyphs and layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Allow colored output (still off for non-terminals and `NO_COLOR`)
    #[serde(default = "default_true")]
    pub color: bool,
    /// Plain ASCII glyphs instead of Unicode/emoji
    #[serde(default)]
    pub ascii: bool,
    /// Color theme: "classic" or "mono"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Header rule width in columns
    #[serde(default = "default_width")]
    pub width: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            ascii: false,
            theme: default_theme(),
            width: DEFAULT_WIDTH,
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_theme() -> String {
    ThemeId::default().to_string()
}
fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Config {
    /// Load from `path`, or from the default locations when `None`
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config: Config = match path {
            Some(p) => {
                let content = std::fs::read_to_string(p)
                    .with_context(|| format!("Failed to read config from {}", p))?;
                toml::from_str(&content)
                    .with_context(|| format!("Failed to parse config {}", p))?
            }
            None => {
                let mut default_paths = vec![PathBuf::from("workflow-demo.toml")];
                if let Some(home) = dirs::home_dir() {
                    default_paths.push(home.join(".config/workflow-demo/config.toml"));
                }

                Self::load_first(&default_paths)?.unwrap_or_else(|| {
                    debug!("No config file found, using defaults");
                    Self::default()
                })
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Parse the first of `paths` that exists. Missing files are skipped;
    /// any other read failure is an error.
    fn load_first(paths: &[PathBuf]) -> Result<Option<Self>> {
        for p in paths {
            let content = match std::fs::read_to_string(p) {
                Ok(content) => content,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to read config from {}", p.display()))
                }
            };
            debug!(path = %p.display(), "Loaded config file");
            let config = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config {}", p.display()))?;
            return Ok(Some(config));
        }
        Ok(None)
    }

    /// Load using `$WORKFLOW_DEMO_CONFIG` if it is set
    pub fn load_from_env() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV_VAR).ok();
        Self::load(path.as_deref())
    }

    pub fn validate(&self) -> std::result::Result<(), DemoError> {
        for (name, secs) in [
            ("standard_delay_secs", self.playback.standard_delay_secs),
            ("quick_delay_secs", self.playback.quick_delay_secs),
        ] {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(DemoError::Config(format!(
                    "playback.{} must be positive, got {}",
                    name, secs
                )));
            }
        }
        // Multiplier and delay checks share their wording with playback validation.
        for quick in [false, true] {
            self.playback_config(quick)
                .validate()
                .map_err(|e| DemoError::Config(e.to_string()))?;
        }
        if self.ui.width == 0 {
            return Err(DemoError::Config("ui.width must be at least 1".to_string()));
        }
        self.theme_id()?;
        Ok(())
    }

    pub fn theme_id(&self) -> std::result::Result<ThemeId, DemoError> {
        self.ui
            .theme
            .parse::<ThemeId>()
            .map_err(|e| DemoError::Config(format!("ui.theme: {}", e)))
    }

    /// Playback timing for the selected mode
    pub fn playback_config(&self, quick_mode: bool) -> PlaybackConfig {
        PlaybackConfig {
            quick_mode,
            base_delay_secs: if quick_mode {
                self.playback.quick_delay_secs
            } else {
                self.playback.standard_delay_secs
            },
            multipliers: self.playback.multipliers,
        }
    }

    /// Styler for these UI settings; `terminal_color` is what the terminal allows
    pub fn styler(&self, terminal_color: bool) -> std::result::Result<Styler, DemoError> {
        let theme = ThemeColors::from_id(self.theme_id()?);
        let glyphs = if self.ui.ascii {
            Glyphs::ascii()
        } else {
            Glyphs::unicode()
        };
        Ok(Styler::new(theme)
            .with_color(self.ui.color && terminal_color)
            .with_glyphs(glyphs)
            .with_width(self.ui.width))
    }
}
