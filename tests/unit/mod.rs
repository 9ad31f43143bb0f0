//! Unit tests for workflow-demo modules
//!
//! These tests drive playback through in-memory renderers and clocks,
//! without real delays or terminal output.

mod test_demo_script;
mod test_player;
