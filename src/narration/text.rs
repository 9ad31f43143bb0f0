//! Styled text for free-form narration blocks.
//!
//! Script content names a [`Tone`] for each run of text instead of carrying
//! terminal escape codes; the styler decides what a tone looks like.

/// Semantic role of a run of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tone {
    #[default]
    Plain,
    /// Banner and header text
    Title,
    /// Bold section labels
    Heading,
    /// Agent names, quoted commands, insight labels
    Accent,
    Success,
    /// Bold success, for results panels
    Highlight,
    Warning,
    Error,
    /// Bold inline emphasis
    Emphasis,
}

/// A run of text with a single tone
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub tone: Tone,
    pub text: String,
}

impl Span {
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }
}

/// One output line made of styled spans
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    /// An empty line
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(Tone::Plain, text)
    }

    pub fn styled(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            spans: vec![Span::new(tone, text)],
        }
    }

    /// Append another span, builder style
    pub fn with(mut self, tone: Tone, text: impl Into<String>) -> Self {
        self.spans.push(Span::new(tone, text));
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The line's text with all styling dropped
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<&str> for Line {
    fn from(text: &str) -> Self {
        Line::plain(text)
    }
}

impl From<String> for Line {
    fn from(text: String) -> Self {
        Line::plain(text)
    }
}
