//! Framing sections around the scenarios: welcome banner, agent
//! architecture, performance metrics and the closing summary.

use super::agents::AgentId;
use crate::narration::{Line, NarrationEvent, Tone};
use crate::ui::style::Glyphs;

/// Inner width of the welcome banner box
const BANNER_WIDTH: usize = 68;

pub const PROJECT_URL: &str = "https://github.com/DoctorMen/ai-workflow-automation";

/// One row of the before/after metrics table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub name: &'static str,
    pub before: &'static str,
    pub after: &'static str,
    pub improvement: &'static str,
}

pub const PERFORMANCE_METRICS: [Metric; 4] = [
    Metric {
        name: "Process Execution Time",
        before: "4 hours",
        after: "15 minutes",
        improvement: "94% faster",
    },
    Metric {
        name: "Error Rate",
        before: "15%",
        after: "2%",
        improvement: "87% reduction",
    },
    Metric {
        name: "Manual Intervention",
        before: "60%",
        after: "5%",
        improvement: "92% reduction",
    },
    Metric {
        name: "Cost per Process",
        before: "$250",
        after: "$35",
        improvement: "86% savings",
    },
];

pub fn mode_label(quick_mode: bool) -> &'static str {
    if quick_mode {
        "QUICK MODE"
    } else {
        "STANDARD MODE"
    }
}

/// Boxed title banner followed by the run mode
pub fn welcome(quick_mode: bool, glyphs: &Glyphs) -> Vec<NarrationEvent> {
    let rule = glyphs.box_horizontal().repeat(BANNER_WIDTH);
    let boxed = |text: &str| {
        Line::styled(
            Tone::Title,
            format!(
                "{v}{:<width$}{v}",
                text,
                v = glyphs.box_vertical(),
                width = BANNER_WIDTH
            ),
        )
    };

    vec![
        NarrationEvent::free_text(vec![
            Line::blank(),
            Line::styled(
                Tone::Title,
                format!("{}{}{}", glyphs.box_top_left(), rule, glyphs.box_top_right()),
            ),
            boxed("     AI WORKFLOW AUTOMATION PLATFORM - INTERACTIVE DEMO"),
            boxed("     Transform Business Processes with Agentic AI"),
            Line::styled(
                Tone::Title,
                format!(
                    "{}{}{}",
                    glyphs.box_bottom_left(),
                    rule,
                    glyphs.box_bottom_right()
                ),
            ),
            Line::blank(),
        ]),
        NarrationEvent::free_text_held(
            vec![
                Line::styled(Tone::Warning, format!("Running in {}", mode_label(quick_mode))),
                Line::blank(),
            ],
            1.5,
        ),
    ]
}

/// Core and composer agent listing
pub fn architecture(glyphs: &Glyphs) -> Vec<NarrationEvent> {
    let mut lines = vec![
        Line::styled(Tone::Heading, "Multi-Agent Orchestration System:"),
        Line::blank(),
        Line::styled(Tone::Accent, "Core Agents:"),
    ];
    for agent in AgentId::CORE {
        lines.extend(agent.profile_lines(glyphs));
    }
    lines.push(Line::blank());
    lines.push(Line::styled(Tone::Accent, "Composer Agents:"));
    for agent in AgentId::COMPOSERS {
        lines.extend(agent.profile_lines(glyphs));
    }

    vec![
        NarrationEvent::header("AI Agent Architecture"),
        NarrationEvent::free_text_held(lines, 2.0),
    ]
}

/// Before/after metrics table, with a `width`-wide rule under the column names
pub fn performance_metrics(width: usize) -> Vec<NarrationEvent> {
    let mut lines = vec![
        Line::styled(Tone::Heading, "Before vs After Implementation:"),
        Line::blank(),
        Line::plain(format!(
            "{:<25} {:<15} {:<15} {}",
            "Metric", "Before", "After", "Improvement"
        )),
        Line::plain("-".repeat(width)),
    ];
    for m in PERFORMANCE_METRICS {
        lines.push(
            Line::plain(format!("{:<25} {:<15} {:<15} ", m.name, m.before, m.after))
                .with(Tone::Success, m.improvement),
        );
    }

    vec![
        NarrationEvent::header("Performance Metrics"),
        NarrationEvent::free_text_held(lines, 2.0),
    ]
}

/// Closing summary and call to action
pub fn conclusion(glyphs: &Glyphs) -> Vec<NarrationEvent> {
    let mut lines = vec![Line::styled(
        Tone::Highlight,
        format!("{} Successfully demonstrated:", glyphs.check()),
    )];
    for item in [
        "Multi-agent orchestration",
        "Natural language workflow automation",
        "Real-world business process optimization",
        "Significant time and cost savings",
    ] {
        lines.push(Line::plain(format!("  {} {}", glyphs.bullet(), item)));
    }
    lines.push(Line::blank());
    lines.push(Line::styled(Tone::Accent, "Ready to transform your workflows?"));
    lines.push(Line::plain(format!("Visit: {}", PROJECT_URL)));
    lines.push(Line::blank());

    vec![
        NarrationEvent::header("Demo Complete"),
        NarrationEvent::free_text(lines),
    ]
}
