//! Workflow Demo - AI Workflow Automation Platform, Interactive Demo
//!
//! A terminal presentation that narrates a multi-agent workflow automation
//! run. Nothing is executed: a fixed [`narration::Script`] is played back
//! with timed pauses.
//!
//! - **Narration**: events, scripts, timing and the playback engine
//! - **Demo**: the agent roster, scenarios and framing sections
//! - **UI**: themes, styling and output sinks
//!
//! # Quick Start
//!
//! ```ignore
//! use workflow_demo::demo::demo_script;
//! use workflow_demo::narration::{CancelSignal, NarrationPlayer, PlaybackConfig};
//! use workflow_demo::ui::{renderer::TerminalRenderer, style::Styler};
//!
//! let styler = Styler::default();
//! let script = demo_script(true, &styler);
//! let mut player = NarrationPlayer::new(PlaybackConfig::quick(), styler);
//! player.play(&script, &mut TerminalRenderer::stdout(), &CancelSignal::new()).await?;
//! ```

pub mod cli;
pub mod config;
pub mod demo;
pub mod errors;
pub mod narration;
pub mod observability;
pub mod ui;
