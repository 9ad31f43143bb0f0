use async_trait::async_trait;
use proptest::prelude::*;
use std::io;
use std::time::Duration;
use workflow_demo::narration::{
    CancelSignal, Clock, Line, NarrationEvent, NarrationPlayer, PlaybackConfig, PlaybackOutcome,
    PlaybackState, Script,
};
use workflow_demo::ui::renderer::{MemoryRenderer, Renderer};
use workflow_demo::ui::style::Styler;

/// Returns immediately
struct InstantClock;

#[async_trait]
impl Clock for InstantClock {
    async fn sleep(&self, _duration: Duration) {}
}

/// Records writes and cancels playback right after write number `cancel_after`
struct CancellingRenderer {
    inner: MemoryRenderer,
    cancel: CancelSignal,
    cancel_after: usize,
}

impl Renderer for CancellingRenderer {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.inner.write(text)?;
        if self.inner.len() == self.cancel_after + 1 {
            self.cancel.cancel();
        }
        Ok(())
    }
}

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .unwrap()
}

fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ]{0,24}"
}

fn event() -> impl Strategy<Value = NarrationEvent> {
    prop_oneof![
        text().prop_map(|t| NarrationEvent::header(t)),
        (1u32..50, text()).prop_map(|(i, t)| NarrationEvent::step(i, t)),
        text().prop_map(|t| NarrationEvent::result(t)),
        (
            prop::collection::vec(text(), 0..4),
            prop::option::of(0.0f64..3.0)
        )
            .prop_map(|(lines, hold)| NarrationEvent::FreeText {
                lines: lines.into_iter().map(Line::from).collect(),
                hold,
            }),
    ]
}

fn script() -> impl Strategy<Value = Script> {
    prop::collection::vec(event(), 1..24).prop_map(Script::new)
}

fn player(quick: bool) -> NarrationPlayer {
    NarrationPlayer::new(PlaybackConfig::for_mode(quick), Styler::plain()).with_clock(InstantClock)
}

proptest! {
    #[test]
    fn prop_playback_preserves_order(script in script(), quick in any::<bool>()) {
        let mut player = player(quick);
        let mut renderer = MemoryRenderer::new();

        let outcome = runtime()
            .block_on(player.play(&script, &mut renderer, &CancelSignal::new()))
            .unwrap();

        prop_assert_eq!(outcome, PlaybackOutcome::Completed);
        prop_assert_eq!(renderer.len(), script.len());
        let styler = Styler::plain();
        for (write, event) in renderer.writes().iter().zip(script.events()) {
            prop_assert_eq!(write, &styler.format_event(event));
        }
    }

    #[test]
    fn prop_interrupt_after_event_k(script in script(), seed in any::<prop::sample::Index>()) {
        let k = seed.index(script.len());
        let cancel = CancelSignal::new();
        let mut renderer = CancellingRenderer {
            inner: MemoryRenderer::new(),
            cancel: cancel.clone(),
            cancel_after: k,
        };
        let mut player = player(true);

        let outcome = runtime()
            .block_on(player.play(&script, &mut renderer, &cancel))
            .unwrap();

        prop_assert_eq!(outcome, PlaybackOutcome::Interrupted { rendered: k + 1 });
        prop_assert_eq!(renderer.inner.len(), k + 1);
        prop_assert_eq!(player.state(), PlaybackState::Interrupted);
    }

    #[test]
    fn prop_quick_never_slower(script in script()) {
        let quick = script.total_delay(&PlaybackConfig::quick());
        let standard = script.total_delay(&PlaybackConfig::standard());
        prop_assert!(quick <= standard);
        if standard > Duration::ZERO {
            prop_assert!(quick < standard);
        }
    }

    #[test]
    fn prop_replay_is_deterministic(script in script()) {
        let rt = runtime();
        let mut first = MemoryRenderer::new();
        let mut second = MemoryRenderer::new();

        rt.block_on(player(false).play(&script, &mut first, &CancelSignal::new())).unwrap();
        rt.block_on(player(false).play(&script, &mut second, &CancelSignal::new())).unwrap();

        prop_assert_eq!(first.writes(), second.writes());
    }
}

#[test]
fn test_empty_script_renders_nothing() {
    let mut renderer = MemoryRenderer::new();
    let result = runtime().block_on(player(true).play(
        &Script::default(),
        &mut renderer,
        &CancelSignal::new(),
    ));

    assert!(matches!(
        result,
        Err(workflow_demo::errors::DemoError::InvalidInput(_))
    ));
    assert!(renderer.is_empty());
}
