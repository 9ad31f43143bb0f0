//! Workflow Automation Demo
//!
//! The presentation script:
//! - Welcome banner and run mode
//! - Agent architecture overview
//! - Customer onboarding, sales analysis and deployment scenarios
//! - Performance metrics and closing summary

pub mod agents;
pub mod scenarios;
pub mod showcase;

pub use agents::AgentId;
pub use scenarios::DemoScenario;

use crate::narration::Script;
use crate::ui::style::Styler;

/// Build the full presentation, laid out for `styler`'s glyphs and width
pub fn demo_script(quick_mode: bool, styler: &Styler) -> Script {
    let glyphs = styler.glyphs();
    let mut events = showcase::welcome(quick_mode, glyphs);
    events.extend(showcase::architecture(glyphs));
    for scenario in scenarios::all() {
        events.extend(scenario.events(glyphs));
    }
    events.extend(showcase::performance_metrics(styler.width()));
    events.extend(showcase::conclusion(glyphs));
    Script::new(events)
}
