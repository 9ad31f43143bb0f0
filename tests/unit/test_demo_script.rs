use std::time::Duration;
use workflow_demo::demo::demo_script;
use workflow_demo::narration::{CancelSignal, NarrationEvent, NarrationPlayer, PlaybackConfig};
use workflow_demo::ui::renderer::MemoryRenderer;
use workflow_demo::ui::style::{Glyphs, Styler};

#[test]
fn test_demo_script_timing_matches_modes() {
    let script = demo_script(false, &Styler::plain());
    let standard = script.total_delay(&PlaybackConfig::standard());
    let quick = script.total_delay(&PlaybackConfig::quick());

    // Quick mode scales every pause by the same factor.
    let ratio = quick.as_secs_f64() / standard.as_secs_f64();
    assert!((ratio - 0.3).abs() < 1e-6, "ratio was {}", ratio);
    assert!(standard > Duration::from_secs(30));
}

#[test]
fn test_ascii_demo_output_is_ascii() {
    let styler = Styler::plain().with_glyphs(Glyphs::ascii());
    let script = demo_script(true, &styler);
    for event in script.events() {
        let text = styler.format_event(event);
        assert!(text.is_ascii(), "non-ASCII output: {:?}", text);
    }
}

#[test]
fn test_command_intake_precedes_steps() {
    let script = demo_script(true, &Styler::plain());
    let events = script.events();
    let first_step = events
        .iter()
        .position(|e| matches!(e, NarrationEvent::Step(..)))
        .expect("demo has steps");
    let first_result = events
        .iter()
        .position(|e| matches!(e, NarrationEvent::Result(_)))
        .expect("demo has results");
    // Command intake results come before the first numbered step.
    assert!(first_result < first_step);
}

#[tokio::test]
async fn test_full_demo_plays_in_plain_text() {
    let mut config = PlaybackConfig::quick();
    config.base_delay_secs = 0.0001;
    let styler = Styler::plain();
    let script = demo_script(true, &styler);
    let mut player = NarrationPlayer::new(config, styler);
    let mut renderer = MemoryRenderer::new();

    let outcome = player
        .play(&script, &mut renderer, &CancelSignal::new())
        .await
        .unwrap();

    assert!(outcome.is_completed());
    assert_eq!(renderer.len(), script.len());
    let output = renderer.output();
    for expected in [
        "AI WORKFLOW AUTOMATION PLATFORM - INTERACTIVE DEMO",
        "Strategist Agent (Planning & Strategy)",
        "⚡ Processing...\n   ✓ Complete",
        "Step 4: Workflow Execution",
        "✓ Blue-green deployment strategy selected",
        "Cost per Process",
        "Ready to transform your workflows?",
    ] {
        assert!(output.contains(expected), "missing {:?}", expected);
    }
}

#[test]
fn test_thinking_pause_precedes_completion() {
    let config = PlaybackConfig::standard();
    let script = demo_script(false, &Styler::plain());
    let events = script.events();
    let mut thinking_blocks = 0;
    for (i, event) in events.iter().enumerate() {
        let NarrationEvent::FreeText { lines, .. } = event else {
            continue;
        };
        if lines.last().map(|l| l.plain_text().ends_with("Processing...")) != Some(true) {
            continue;
        }
        assert!(config.delay(event) > Duration::ZERO);
        let NarrationEvent::FreeText { lines: next, .. } = &events[i + 1] else {
            panic!("expected completion after {:?}", event);
        };
        assert!(next[0].plain_text().ends_with("Complete"));
        assert_eq!(config.delay(&events[i + 1]), Duration::ZERO);
        thinking_blocks += 1;
    }
    assert_eq!(thinking_blocks, 9);
}
