//! Demo UI System
//!
//! Terminal styling and output sinks for narration playback.

pub mod renderer;
pub mod style;
pub mod theme;
