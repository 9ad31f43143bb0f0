//! Demo scenarios
//!
//! Each scenario opens with a header and a simulated natural-language
//! request, walks through numbered steps, and closes with a results panel.

pub mod analysis;
pub mod deployment;
pub mod onboarding;

use crate::narration::{Line, NarrationEvent, Tone};
use crate::ui::style::Glyphs;

/// Hold after a results panel; doubles as the beat between scenarios
pub const RESULTS_HOLD: f64 = 2.0;

/// A scripted business-process walkthrough
pub trait DemoScenario: Send + Sync {
    /// Header title
    fn name(&self) -> &str;

    /// Natural-language request that opens the scenario
    fn command(&self) -> &str;

    /// Numbered steps and their output, between the request and the results
    fn body(&self, glyphs: &Glyphs) -> Vec<NarrationEvent>;

    /// Lines of the closing results panel
    fn results(&self, glyphs: &Glyphs) -> Vec<Line>;

    /// Complete narration for this scenario
    fn events(&self, glyphs: &Glyphs) -> Vec<NarrationEvent> {
        let mut events = vec![NarrationEvent::header(self.name())];
        events.extend(command_intake(self.command(), glyphs));
        events.extend(self.body(glyphs));
        events.push(results_panel(self.results(glyphs), glyphs));
        events
    }
}

/// All scenarios in presentation order
pub fn all() -> Vec<Box<dyn DemoScenario>> {
    vec![
        Box::new(onboarding::CustomerOnboardingScenario),
        Box::new(analysis::SalesAnalysisScenario),
        Box::new(deployment::DeploymentPipelineScenario),
    ]
}

/// Echo of the user's request followed by the simulated recognition results
pub fn command_intake(command: &str, glyphs: &Glyphs) -> Vec<NarrationEvent> {
    vec![
        NarrationEvent::free_text_held(
            vec![
                Line::blank(),
                Line::styled(
                    Tone::Heading,
                    format!("{} Vibe Command Input:", glyphs.speech()),
                ),
                Line::plain("   \"")
                    .with(Tone::Accent, command)
                    .with(Tone::Plain, "\""),
            ],
            1.0,
        ),
        NarrationEvent::free_text_held(
            vec![
                Line::blank(),
                Line::styled(
                    Tone::Warning,
                    format!("{} Processing natural language input...", glyphs.cycle()),
                ),
            ],
            1.0,
        ),
        NarrationEvent::result("Intent recognized: Business Process Automation"),
        NarrationEvent::result("Task decomposition complete: 4 sub-tasks identified"),
        NarrationEvent::result("Agent assignment: 3 agents allocated"),
    ]
}

/// Bulleted item for a results or insights list
pub fn bullet(glyphs: &Glyphs, text: impl Into<String>) -> Line {
    Line::plain(format!("   {} {}", glyphs.bullet(), text.into()))
}

/// "Results:" panel held for [`RESULTS_HOLD`]
pub fn results_panel(items: Vec<Line>, glyphs: &Glyphs) -> NarrationEvent {
    let mut lines = vec![
        Line::blank(),
        Line::styled(Tone::Highlight, format!("{} Results:", glyphs.chart())),
    ];
    lines.extend(items);
    NarrationEvent::free_text_held(lines, RESULTS_HOLD)
}
