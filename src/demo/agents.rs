//! Agent roster shown in the presentation.
//!
//! These are display profiles only; nothing here runs a model.

use crate::narration::{Line, NarrationEvent, Tone};
use crate::ui::style::Glyphs;

/// One of the specialized agents featured in the demo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentId {
    Strategist,
    Executor,
    Automation,
    Parallel,
    Docs,
    Cicd,
    Divergent,
}

impl AgentId {
    /// Agents listed under "Core Agents"
    pub const CORE: [AgentId; 3] = [AgentId::Strategist, AgentId::Executor, AgentId::Divergent];

    /// Agents listed under "Composer Agents"
    pub const COMPOSERS: [AgentId; 4] = [
        AgentId::Automation,
        AgentId::Parallel,
        AgentId::Docs,
        AgentId::Cicd,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            AgentId::Strategist => "Strategist Agent",
            AgentId::Executor => "Executor Agent",
            AgentId::Automation => "Automation Engineer",
            AgentId::Parallel => "Parallelization Expert",
            AgentId::Docs => "Documentation Specialist",
            AgentId::Cicd => "CI/CD Operations",
            AgentId::Divergent => "Divergent Thinker",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            AgentId::Strategist => "Planning & Strategy",
            AgentId::Executor => "Task Execution",
            AgentId::Automation => "Process Optimization",
            AgentId::Parallel => "Performance Scaling",
            AgentId::Docs => "Knowledge Management",
            AgentId::Cicd => "Deployment Automation",
            AgentId::Divergent => "Creative Problem-Solving",
        }
    }

    pub fn model(&self) -> &'static str {
        match self {
            AgentId::Strategist | AgentId::Executor | AgentId::Divergent => "GPT-5",
            _ => "GPT-4",
        }
    }

    /// The "thinking" block for this agent working on `task`: the profile
    /// and a processing notice held for `hold` unit delays, then completion
    pub fn thinking(&self, task: &str, hold: f64, glyphs: &Glyphs) -> [NarrationEvent; 2] {
        [
            NarrationEvent::free_text_held(
                vec![
                    Line::styled(
                        Tone::Accent,
                        format!("{} {} ({})", glyphs.robot(), self.name(), self.role()),
                    ),
                    Line::plain(format!("   Model: {}", self.model())),
                    Line::plain(format!("   Task: {}", task)),
                    Line::plain("   ")
                        .with(Tone::Warning, format!("{} Processing...", glyphs.bolt())),
                ],
                hold,
            ),
            NarrationEvent::free_text(vec![Line::plain("   ")
                .with(Tone::Success, format!("{} Complete", glyphs.check()))]),
        ]
    }

    /// Two roster lines: name with model, then role
    pub fn profile_lines(&self, glyphs: &Glyphs) -> [Line; 2] {
        [
            Line::plain(format!(
                "  {} {} ({})",
                glyphs.bullet(),
                self.name(),
                self.model()
            )),
            Line::plain(format!("    Role: {}", self.role())),
        ]
    }
}
