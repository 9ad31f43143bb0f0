//! AI Workflow Automation Platform - Interactive Demo
//!
//! Command-line entry point: parse flags, load settings, play the script.

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};

use crate::config::Config;
use crate::demo::demo_script;
use crate::errors::{get_exit_code, is_interrupt_error, DemoError, EXIT_SUCCESS};
use crate::narration::{CancelSignal, NarrationPlayer, PlaybackOutcome, Tone};
use crate::observability::telemetry::init_tracing;
use crate::ui::renderer::{stderr_supports_color, supports_color, Renderer, TerminalRenderer};
use crate::ui::style::Styler;

const EXAMPLES: &str = "\
Examples:
  workflow-demo              Run standard demo (slower, more detailed)
  workflow-demo --quick      Run quick demo (faster for screencasts)

This demo showcases:
  - Multi-agent AI orchestration
  - Natural language workflow automation
  - Real-world business process examples
  - Performance metrics and ROI";

#[derive(Parser, Debug)]
#[command(name = "workflow-demo")]
#[command(about = "AI Workflow Automation Platform - Interactive Demo")]
#[command(version)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// Run demo in quick mode (faster execution for recordings)
    #[arg(long)]
    pub quick: bool,
}

/// Run the demo and return the process exit code
pub async fn run(cancel: CancelSignal) -> u8 {
    init_tracing();

    let cli = Cli::parse();
    let error_color = stderr_supports_color();
    let config = match Config::load_from_env() {
        Ok(config) => config,
        Err(e) => return report_error(&e, &Styler::default().with_color(error_color)),
    };
    let mut renderer = TerminalRenderer::stdout();

    match execute(&cli, &config, supports_color(), &mut renderer, &cancel).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let styler = config
                .styler(error_color)
                .unwrap_or_else(|_| Styler::default().with_color(error_color));
            report_error(&e, &styler)
        }
    }
}

/// Play the demo for already-parsed flags and settings.
///
/// An interrupt prints the interrupt notice and returns
/// `DemoError::UserInterrupt`.
pub async fn execute(
    cli: &Cli,
    config: &Config,
    terminal_color: bool,
    renderer: &mut dyn Renderer,
    cancel: &CancelSignal,
) -> Result<()> {
    let styler = config.styler(terminal_color)?;
    let playback = config.playback_config(cli.quick);
    let script = demo_script(cli.quick, &styler);

    info!(
        quick_mode = cli.quick,
        events = script.len(),
        color = styler.color_enabled(),
        "Starting demo"
    );

    let mut player = NarrationPlayer::new(playback, styler.clone());
    match player.play(&script, renderer, cancel).await? {
        PlaybackOutcome::Completed => Ok(()),
        PlaybackOutcome::Interrupted { rendered } => {
            warn!(rendered, "Demo interrupted");
            let interrupt = DemoError::UserInterrupt;
            renderer.write(&format!(
                "\n\n{}\n",
                styler.paint(Tone::Warning, &interrupt.to_string())
            ))?;
            Err(interrupt.into())
        }
    }
}

/// `Error: <message>` line styled with the error tone
pub fn format_error(e: &anyhow::Error, styler: &Styler) -> String {
    styler.paint(Tone::Error, &format!("Error: {:#}", e))
}

/// Print `e` to stderr and pick the exit code; an interrupt was already
/// announced on stdout and prints nothing here
pub fn report_error(e: &anyhow::Error, styler: &Styler) -> u8 {
    if !is_interrupt_error(e) {
        eprintln!("\n{}", format_error(e, styler));
    }
    get_exit_code(e)
}
