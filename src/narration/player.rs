//! Narration Player
//!
//! Walks a script one event at a time: format, write, pause. The pause is
//! raced against the cancel signal so an interrupt stops playback without
//! waiting out the remaining delay.

use super::{PlaybackConfig, Script};
use crate::errors::{DemoError, Result};
use crate::observability::telemetry::sanitize_for_log;
use crate::ui::renderer::Renderer;
use crate::ui::style::Styler;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tracing::{debug, error, info, warn};

/// Current state of the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Not yet started, or reset
    Idle,
    /// Playing a script
    Running,
    /// Last event's delay elapsed
    Completed,
    /// Stopped by the cancel signal
    Interrupted,
    /// Renderer failed mid-event
    Failed,
}

/// How a successful `play` call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Completed,
    /// Stopped early; `rendered` events were written before the stop
    Interrupted { rendered: usize },
}

impl PlaybackOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, PlaybackOutcome::Completed)
    }
}

/// Source of inter-event pauses
#[async_trait]
pub trait Clock: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Wall-clock pauses on the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Cloneable cancellation handle shared between the signal listener and playback
#[derive(Debug, Clone)]
pub struct CancelSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once `cancel` has been called on any clone
    pub async fn cancelled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so this only returns once cancelled.
        let _ = rx.wait_for(|cancelled| *cancelled).await;
    }
}

/// Plays a [`Script`] through a [`Renderer`]
pub struct NarrationPlayer {
    config: PlaybackConfig,
    styler: Styler,
    clock: Box<dyn Clock>,
    state: PlaybackState,
    rendered: usize,
    elapsed_delay: Duration,
}

impl NarrationPlayer {
    /// Create a player that pauses on the tokio timer
    pub fn new(config: PlaybackConfig, styler: Styler) -> Self {
        Self {
            config,
            styler,
            clock: Box::new(TokioClock),
            state: PlaybackState::Idle,
            rendered: 0,
            elapsed_delay: Duration::ZERO,
        }
    }

    /// Replace the clock, e.g. with one that returns immediately
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Play every event of `script` in order.
    ///
    /// Fails with `InvalidInput` before rendering anything if the script is
    /// empty or the config is invalid. A renderer error moves the player to
    /// `Failed` and is returned as `DemoError::Renderer`.
    pub async fn play(
        &mut self,
        script: &Script,
        renderer: &mut dyn Renderer,
        cancel: &CancelSignal,
    ) -> Result<PlaybackOutcome> {
        if script.is_empty() {
            return Err(DemoError::InvalidInput(
                "script must contain at least one event".to_string(),
            ));
        }
        self.config.validate()?;

        self.state = PlaybackState::Running;
        self.rendered = 0;
        self.elapsed_delay = Duration::ZERO;
        let start = Instant::now();

        info!(
            events = script.len(),
            quick_mode = self.config.quick_mode,
            planned_ms = self.planned_delay(script).as_millis() as u64,
            "Playback started"
        );

        for (index, event) in script.events().iter().enumerate() {
            if cancel.is_cancelled() {
                return Ok(self.interrupted());
            }

            let text = self.styler.format_event(event);
            if let Err(e) = renderer.write(&text) {
                self.state = PlaybackState::Failed;
                error!(
                    index,
                    kind = %event.kind(),
                    error = %sanitize_for_log(&e.to_string()),
                    "Renderer failed"
                );
                return Err(DemoError::Renderer(e));
            }
            self.rendered += 1;

            let delay = self.config.delay(event);
            debug!(
                index,
                kind = %event.kind(),
                delay_ms = delay.as_millis() as u64,
                "Rendered event"
            );
            if delay.is_zero() {
                continue;
            }

            let cancelled = tokio::select! {
                biased;
                _ = cancel.cancelled() => true,
                _ = self.clock.sleep(delay) => false,
            };
            if cancelled {
                return Ok(self.interrupted());
            }
            self.elapsed_delay = self.elapsed_delay.saturating_add(delay);
        }

        if cancel.is_cancelled() {
            return Ok(self.interrupted());
        }
        self.state = PlaybackState::Completed;
        info!(
            rendered = self.rendered,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Playback completed"
        );
        Ok(PlaybackOutcome::Completed)
    }

    fn interrupted(&mut self) -> PlaybackOutcome {
        self.state = PlaybackState::Interrupted;
        warn!(rendered = self.rendered, "Playback interrupted");
        PlaybackOutcome::Interrupted {
            rendered: self.rendered,
        }
    }

    /// Total pause `play` would take for `script`
    pub fn planned_delay(&self, script: &Script) -> Duration {
        script.total_delay(&self.config)
    }

    /// Return to `Idle` so the player can run again
    pub fn reset(&mut self) {
        self.state = PlaybackState::Idle;
        self.rendered = 0;
        self.elapsed_delay = Duration::ZERO;
    }

    // === Accessors ===

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Events written during the current or last run
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Pause time completed during the current or last run
    pub fn elapsed_delay(&self) -> Duration {
        self.elapsed_delay
    }
}
