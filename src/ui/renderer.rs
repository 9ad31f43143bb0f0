//! Output sinks for narration playback.
//!
//! Terminal capability detection: respects `TERM=dumb`, unset `TERM`, and the
//! `NO_COLOR` environment variable.

use std::io::{self, IsTerminal, Write};

/// Sink that receives the formatted text of each narration event.
///
/// Playback issues exactly one `write` per event. Errors are treated as
/// unrecoverable for the current run.
pub trait Renderer: Send {
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Renderer over any writer, flushing after every event
pub struct TerminalRenderer<W: Write + Send> {
    out: W,
}

impl<W: Write + Send> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> Renderer for TerminalRenderer<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.flush()
    }
}

/// Renderer that records every write, for tests and dry runs
#[derive(Debug, Clone, Default)]
pub struct MemoryRenderer {
    writes: Vec<String>,
}

impl MemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Each write, in order
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Everything written, concatenated
    pub fn output(&self) -> String {
        self.writes.concat()
    }
}

impl Renderer for MemoryRenderer {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

fn ansi_terminal(is_terminal: bool) -> bool {
    if !is_terminal {
        return false;
    }
    match std::env::var("TERM") {
        Ok(term) => !term.is_empty() && term != "dumb",
        Err(_) => false,
    }
}

/// Check if the terminal supports ANSI escape sequences.
///
/// Returns `false` if stdout is not a terminal or `TERM` is `"dumb"` or unset.
pub fn supports_ansi() -> bool {
    ansi_terminal(io::stdout().is_terminal())
}

/// Check if color output is allowed (`NO_COLOR`, per <https://no-color.org/>).
pub fn supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && supports_ansi()
}

/// Same as [`supports_color`], for error reports on stderr
pub fn stderr_supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && ansi_terminal(io::stderr().is_terminal())
}
