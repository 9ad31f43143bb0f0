//! Automated deployment pipeline

use super::{bullet, DemoScenario};
use crate::demo::agents::AgentId;
use crate::narration::{Line, NarrationEvent, Tone};
use crate::ui::style::Glyphs;

/// Pipeline stages as (in-progress message, success message)
const STAGES: [(&str, &str); 4] = [
    ("Building container image...", "Build successful"),
    ("Running automated tests...", "All 147 tests passed"),
    ("Deploying to staging...", "Staging deployment successful"),
    ("Deploying to production...", "Production deployment successful"),
];

const STAGE_RUNNING_HOLD: f64 = 0.5;
const STAGE_DONE_HOLD: f64 = 0.3;

pub struct DeploymentPipelineScenario;

impl DemoScenario for DeploymentPipelineScenario {
    fn name(&self) -> &str {
        "DEMO: Automated Deployment Pipeline"
    }

    fn command(&self) -> &str {
        "deploy new microservice with automated testing and rollback capability"
    }

    fn body(&self, glyphs: &Glyphs) -> Vec<NarrationEvent> {
        let mut events = vec![NarrationEvent::step(1, "Deployment Strategy")];
        events.extend(AgentId::Strategist.thinking("Plan deployment sequence", 1.0, glyphs));
        events.push(NarrationEvent::result("Blue-green deployment strategy selected"));

        events.push(NarrationEvent::step(2, "Pipeline Configuration"));
        events.extend(AgentId::Cicd.thinking("Configure deployment pipeline", 1.0, glyphs));
        events.push(NarrationEvent::result(format!(
            "Pipeline configured: Build {a} Test {a} Stage {a} Deploy",
            a = glyphs.arrow()
        )));

        events.push(NarrationEvent::step(3, "Automated Deployment"));
        for (running, done) in STAGES {
            events.push(NarrationEvent::free_text_held(
                vec![Line::styled(
                    Tone::Warning,
                    format!("   {} {}", glyphs.arrow(), running),
                )],
                STAGE_RUNNING_HOLD,
            ));
            events.push(NarrationEvent::free_text_held(
                vec![Line::styled(
                    Tone::Success,
                    format!("   {} {}", glyphs.check(), done),
                )],
                STAGE_DONE_HOLD,
            ));
        }
        events
    }

    fn results(&self, glyphs: &Glyphs) -> Vec<Line> {
        vec![
            bullet(
                glyphs,
                format!("Deployment time: 45 minutes {} 8 minutes", glyphs.arrow()),
            ),
            bullet(glyphs, "Manual steps: 0 (fully automated)"),
            bullet(glyphs, "Error rate: 0%"),
            bullet(glyphs, "Zero-downtime deployment achieved"),
        ]
    }
}
