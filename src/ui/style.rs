//! Demo Style System
//!
//! Turns narration events into terminal text. The [`Styler`] is an explicit
//! value: playback receives one at construction, so tests can format without
//! colors and two players can use different themes side by side.

use colored::{Color, Colorize};

use super::theme::ThemeColors;
use crate::narration::{Line, NarrationEvent, Tone};

/// Default line width for headers and rules
pub const DEFAULT_WIDTH: usize = 70;

/// Unicode glyphs used by the demo.
///
/// Each glyph is exposed as a method that returns the Unicode version
/// by default, or a plain-ASCII fallback when built with `ascii = true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyphs {
    ascii: bool,
}

impl Glyphs {
    pub fn unicode() -> Self {
        Self { ascii: false }
    }

    pub fn ascii() -> Self {
        Self { ascii: true }
    }

    pub fn is_ascii(&self) -> bool {
        self.ascii
    }

    fn pick(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.ascii {
            ascii
        } else {
            unicode
        }
    }

    pub fn check(&self) -> &'static str {
        self.pick("✓", "[ok]")
    }

    pub fn robot(&self) -> &'static str {
        self.pick("🤖", "[bot]")
    }

    pub fn speech(&self) -> &'static str {
        self.pick("💬", ">>")
    }

    pub fn cycle(&self) -> &'static str {
        self.pick("🔄", "..")
    }

    pub fn bolt(&self) -> &'static str {
        self.pick("⚡", "*")
    }

    pub fn chart(&self) -> &'static str {
        self.pick("📊", "#")
    }

    pub fn bullet(&self) -> &'static str {
        self.pick("•", "-")
    }

    pub fn arrow(&self) -> &'static str {
        self.pick("→", "->")
    }

    // Box drawing
    pub fn box_top_left(&self) -> &'static str {
        self.pick("╔", "+")
    }

    pub fn box_top_right(&self) -> &'static str {
        self.pick("╗", "+")
    }

    pub fn box_bottom_left(&self) -> &'static str {
        self.pick("╚", "+")
    }

    pub fn box_bottom_right(&self) -> &'static str {
        self.pick("╝", "+")
    }

    pub fn box_horizontal(&self) -> &'static str {
        self.pick("═", "=")
    }

    pub fn box_vertical(&self) -> &'static str {
        self.pick("║", "|")
    }
}

/// Formats narration events for a terminal
#[derive(Debug, Clone, PartialEq)]
pub struct Styler {
    theme: ThemeColors,
    color: bool,
    glyphs: Glyphs,
    width: usize,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new(ThemeColors::default())
    }
}

impl Styler {
    pub fn new(theme: ThemeColors) -> Self {
        Self {
            theme,
            color: true,
            glyphs: Glyphs::unicode(),
            width: DEFAULT_WIDTH,
        }
    }

    /// No ANSI escapes at all; used for tests and piped output
    pub fn plain() -> Self {
        Self::new(ThemeColors::MONO).with_color(false)
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width.max(1);
        self
    }

    pub fn glyphs(&self) -> &Glyphs {
        &self.glyphs
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    fn apply(&self, text: &str, color: Option<Color>, bold: bool) -> String {
        if !self.color || text.is_empty() {
            return text.to_string();
        }
        match (color, bold) {
            (Some(c), true) => text.color(c).bold().to_string(),
            (Some(c), false) => text.color(c).to_string(),
            (None, true) => text.bold().to_string(),
            (None, false) => text.to_string(),
        }
    }

    /// Style `text` according to `tone`
    pub fn paint(&self, tone: Tone, text: &str) -> String {
        match tone {
            Tone::Plain => text.to_string(),
            Tone::Title => self.apply(text, self.theme.title, true),
            Tone::Heading | Tone::Emphasis => self.apply(text, None, true),
            Tone::Accent => self.apply(text, self.theme.accent, false),
            Tone::Success => self.apply(text, self.theme.success, false),
            Tone::Highlight => self.apply(text, self.theme.success, true),
            Tone::Warning => self.apply(text, self.theme.warning, false),
            Tone::Error => self.apply(text, self.theme.error, true),
        }
    }

    pub fn paint_line(&self, line: &Line) -> String {
        line.spans()
            .iter()
            .map(|span| self.paint(span.tone, &span.text))
            .collect()
    }

    /// Full terminal text for one event, newline-terminated
    pub fn format_event(&self, event: &NarrationEvent) -> String {
        match event {
            NarrationEvent::Header(text) => self.format_header(text),
            NarrationEvent::Step(index, text) => format!(
                "\n{}\n",
                self.apply(&format!("Step {}: {}", index, text), self.theme.step, true)
            ),
            NarrationEvent::Result(text) => format!(
                "{}\n",
                self.paint(Tone::Success, &format!("{} {}", self.glyphs.check(), text))
            ),
            NarrationEvent::FreeText { lines, .. } => {
                let mut out = String::new();
                for line in lines {
                    out.push_str(&self.paint_line(line));
                    out.push('\n');
                }
                out
            }
        }
    }

    fn format_header(&self, text: &str) -> String {
        let rule = "=".repeat(self.width);
        let centered = format!("{:^width$}", text, width = self.width);
        format!(
            "\n{}\n{}\n{}\n\n",
            self.paint(Tone::Title, &rule),
            self.paint(Tone::Title, &centered),
            self.paint(Tone::Title, &rule)
        )
    }
}
