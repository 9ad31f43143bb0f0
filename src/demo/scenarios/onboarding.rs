//! Customer onboarding automation

use super::{bullet, DemoScenario};
use crate::demo::agents::AgentId;
use crate::narration::{Line, NarrationEvent, Tone};
use crate::ui::style::Glyphs;

pub struct CustomerOnboardingScenario;

impl DemoScenario for CustomerOnboardingScenario {
    fn name(&self) -> &str {
        "DEMO: Customer Onboarding Automation"
    }

    fn command(&self) -> &str {
        "optimize customer onboarding workflow and reduce friction points"
    }

    fn body(&self, glyphs: &Glyphs) -> Vec<NarrationEvent> {
        let mut events = vec![NarrationEvent::step(1, "Workflow Planning & Analysis")];
        events.extend(AgentId::Strategist.thinking("Analyze current onboarding flow", 1.0, glyphs));
        events.push(NarrationEvent::result(
            "Identified 12 steps, 5 friction points, 3 optimization opportunities",
        ));

        events.push(NarrationEvent::step(2, "Process Optimization"));
        events.extend(AgentId::Automation.thinking("Design optimized workflow", 1.0, glyphs));
        events.push(NarrationEvent::result(
            "Reduced steps from 12 to 6, automated 4 manual tasks",
        ));

        events.push(NarrationEvent::step(3, "Parallelization Strategy"));
        events.extend(AgentId::Parallel.thinking("Identify parallelizable tasks", 1.0, glyphs));
        events.push(NarrationEvent::result(
            "3 tasks can run concurrently, reducing time by 60%",
        ));

        events.push(NarrationEvent::step(4, "Workflow Execution"));
        events.extend(AgentId::Executor.thinking("Execute optimized workflow", 1.5, glyphs));
        events
    }

    fn results(&self, glyphs: &Glyphs) -> Vec<Line> {
        vec![
            bullet(
                glyphs,
                format!("Original time: 2 days {} New time: 30 minutes", glyphs.arrow()),
            ),
            bullet(
                glyphs,
                format!("Manual steps: 8 {} Automated: 6", glyphs.arrow()),
            ),
            bullet(glyphs, "Customer satisfaction: +35%"),
            bullet(glyphs, "Time savings: ").with(Tone::Emphasis, "94%"),
        ]
    }
}
