//! Observability module
//!
//! Structured logging for playback. Presentation output goes to stdout;
//! log output goes to stderr and is off unless `RUST_LOG` is set.

pub mod telemetry;
