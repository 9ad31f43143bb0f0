//! Narration Playback
//!
//! A presentation is a [`Script`] of [`NarrationEvent`]s played back in
//! order by a [`NarrationPlayer`], with a pause after each event:
//! - Headers, numbered steps, results and free-text blocks
//! - Per-kind delay multipliers scaled by a quick or standard unit delay
//! - Injectable clock and renderer for deterministic tests
//! - Cooperative cancellation between events

mod player;
pub mod text;

pub use player::{
    CancelSignal, Clock, NarrationPlayer, PlaybackOutcome, PlaybackState, TokioClock,
};
pub use text::{Line, Span, Tone};

use crate::errors::{DemoError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Unit delay in quick mode, in seconds
pub const QUICK_DELAY_SECS: f64 = 0.3;
/// Unit delay in standard mode, in seconds
pub const STANDARD_DELAY_SECS: f64 = 1.0;
/// Longest accepted unit delay, in seconds
pub const MAX_BASE_DELAY_SECS: f64 = 3600.0;
/// Largest accepted per-kind multiplier
pub const MAX_MULTIPLIER: f64 = 100.0;

/// One unit of scripted output
#[derive(Debug, Clone, PartialEq)]
pub enum NarrationEvent {
    /// Section banner
    Header(String),
    /// Numbered workflow step
    Step(u32, String),
    /// Single result line
    Result(String),
    /// Block of styled lines; `hold` overrides the configured free-text multiplier
    FreeText { lines: Vec<Line>, hold: Option<f64> },
}

/// Discriminant of a [`NarrationEvent`], used for delay lookup and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Header,
    Step,
    Result,
    FreeText,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Header => write!(f, "header"),
            EventKind::Step => write!(f, "step"),
            EventKind::Result => write!(f, "result"),
            EventKind::FreeText => write!(f, "free-text"),
        }
    }
}

impl NarrationEvent {
    pub fn header(text: impl Into<String>) -> Self {
        NarrationEvent::Header(text.into())
    }

    pub fn step(index: u32, text: impl Into<String>) -> Self {
        NarrationEvent::Step(index, text.into())
    }

    pub fn result(text: impl Into<String>) -> Self {
        NarrationEvent::Result(text.into())
    }

    /// Free text that uses the configured free-text multiplier
    pub fn free_text(lines: Vec<Line>) -> Self {
        NarrationEvent::FreeText { lines, hold: None }
    }

    /// Free text held for `hold` unit delays
    pub fn free_text_held(lines: Vec<Line>, hold: f64) -> Self {
        NarrationEvent::FreeText {
            lines,
            hold: Some(hold),
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            NarrationEvent::Header(_) => EventKind::Header,
            NarrationEvent::Step(..) => EventKind::Step,
            NarrationEvent::Result(_) => EventKind::Result,
            NarrationEvent::FreeText { .. } => EventKind::FreeText,
        }
    }
}

/// Per-kind multipliers of the unit delay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayMultipliers {
    pub header: f64,
    pub step: f64,
    pub result: f64,
    pub free_text: f64,
}

impl Default for DelayMultipliers {
    fn default() -> Self {
        Self {
            header: 1.0,
            step: 0.5,
            result: 0.5,
            free_text: 0.0,
        }
    }
}

/// Timing configuration for one playback run
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackConfig {
    pub quick_mode: bool,
    /// Unit delay every multiplier scales
    pub base_delay_secs: f64,
    pub multipliers: DelayMultipliers,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl PlaybackConfig {
    /// Standard pacing for live presentations
    pub fn standard() -> Self {
        Self {
            quick_mode: false,
            base_delay_secs: STANDARD_DELAY_SECS,
            multipliers: DelayMultipliers::default(),
        }
    }

    /// Faster pacing for screencasts
    pub fn quick() -> Self {
        Self {
            quick_mode: true,
            base_delay_secs: QUICK_DELAY_SECS,
            multipliers: DelayMultipliers::default(),
        }
    }

    pub fn for_mode(quick_mode: bool) -> Self {
        if quick_mode {
            Self::quick()
        } else {
            Self::standard()
        }
    }

    /// Reject unit delays outside `(0, MAX_BASE_DELAY_SECS]` and multipliers
    /// outside `[0, MAX_MULTIPLIER]`
    pub fn validate(&self) -> Result<()> {
        if !self.base_delay_secs.is_finite() || self.base_delay_secs <= 0.0 {
            return Err(DemoError::InvalidInput(format!(
                "base delay must be a positive number of seconds, got {}",
                self.base_delay_secs
            )));
        }
        if self.base_delay_secs > MAX_BASE_DELAY_SECS {
            return Err(DemoError::InvalidInput(format!(
                "base delay must be at most {} seconds, got {}",
                MAX_BASE_DELAY_SECS, self.base_delay_secs
            )));
        }
        let m = &self.multipliers;
        for (name, value) in [
            ("header", m.header),
            ("step", m.step),
            ("result", m.result),
            ("free_text", m.free_text),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DemoError::InvalidInput(format!(
                    "{} delay multiplier must be a non-negative number, got {}",
                    name, value
                )));
            }
            if value > MAX_MULTIPLIER {
                return Err(DemoError::InvalidInput(format!(
                    "{} delay multiplier must be at most {}, got {}",
                    name, MAX_MULTIPLIER, value
                )));
            }
        }
        Ok(())
    }

    /// Multiplier applied after `event`
    pub fn multiplier(&self, event: &NarrationEvent) -> f64 {
        match event {
            NarrationEvent::Header(_) => self.multipliers.header,
            NarrationEvent::Step(..) => self.multipliers.step,
            NarrationEvent::Result(_) => self.multipliers.result,
            NarrationEvent::FreeText { hold, .. } => hold.unwrap_or(self.multipliers.free_text),
        }
    }

    /// Pause that follows `event`; saturates at `Duration::MAX`
    pub fn delay(&self, event: &NarrationEvent) -> Duration {
        let secs = self.base_delay_secs * self.multiplier(event);
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

/// Ordered, read-only sequence of narration events
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Script {
    events: Vec<NarrationEvent>,
}

impl Script {
    pub fn new(events: Vec<NarrationEvent>) -> Self {
        Self { events }
    }

    pub fn events(&self) -> &[NarrationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Sum of every pause playback would take under `config`
    pub fn total_delay(&self, config: &PlaybackConfig) -> Duration {
        self.events
            .iter()
            .fold(Duration::ZERO, |total, e| total.saturating_add(config.delay(e)))
    }
}

impl From<Vec<NarrationEvent>> for Script {
    fn from(events: Vec<NarrationEvent>) -> Self {
        Self::new(events)
    }
}

impl FromIterator<NarrationEvent> for Script {
    fn from_iter<I: IntoIterator<Item = NarrationEvent>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
