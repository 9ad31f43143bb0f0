use super::helpers::{fast_config, write_config};
use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn demo_cmd(config: &tempfile::NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("workflow-demo").unwrap();
    cmd.env("WORKFLOW_DEMO_CONFIG", config.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[allow(deprecated)]
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("workflow-demo").unwrap();
    cmd.arg("--version").assert().success();
}

#[allow(deprecated)]
#[test]
fn test_cli_help_mentions_quick() {
    let mut cmd = Command::cargo_bin("workflow-demo").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--quick"))
        .stdout(predicate::str::contains("Examples:"));
}

#[allow(deprecated)]
#[test]
fn test_cli_rejects_unknown_flag() {
    let mut cmd = Command::cargo_bin("workflow-demo").unwrap();
    cmd.arg("--fast").assert().failure();
}

#[test]
fn test_cli_quick_run_completes() {
    let config = fast_config("");
    demo_cmd(&config)
        .arg("--quick")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Running in QUICK MODE"))
        .stdout(predicate::str::contains("DEMO: Customer Onboarding Automation"))
        .stdout(predicate::str::contains("Demo Complete"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn test_cli_standard_run_completes() {
    let config = fast_config("");
    demo_cmd(&config)
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Running in STANDARD MODE"));
}

#[test]
fn test_cli_ascii_config() {
    let config = fast_config("[ui]\nascii = true\n");
    let output = demo_cmd(&config).arg("--quick").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.is_ascii());
    assert!(stdout.contains("[ok] Blue-green deployment strategy selected"));
}

#[test]
fn test_cli_invalid_config_exits_with_error() {
    let config = write_config("[playback]\nquick_delay_secs = -1.0\n");
    demo_cmd(&config)
        .arg("--quick")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("quick_delay_secs"));
}

#[test]
fn test_cli_huge_delay_config_exits_with_error() {
    let config = write_config("[playback]\nstandard_delay_secs = 1e20\n");
    demo_cmd(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("panicked").not());
}

#[allow(deprecated)]
#[test]
fn test_cli_missing_config_file_exits_with_error() {
    let mut cmd = Command::cargo_bin("workflow-demo").unwrap();
    cmd.env("WORKFLOW_DEMO_CONFIG", "/nonexistent/workflow-demo.toml")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config"));
}

#[cfg(unix)]
#[allow(deprecated)]
#[test]
fn test_cli_sigint_exits_130() {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;
    use std::process::{Command as StdCommand, Stdio};
    use std::time::Duration;

    // Standard pacing keeps the demo running long enough to interrupt.
    let config = write_config("");
    let child = StdCommand::new(assert_cmd::cargo::cargo_bin("workflow-demo"))
        .env("WORKFLOW_DEMO_CONFIG", config.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    std::thread::sleep(Duration::from_millis(1000));
    kill(Pid::from_raw(child.id() as i32), Signal::SIGINT).unwrap();

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(130));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Demo interrupted by user"));
    assert!(!stdout.contains("Demo Complete"));
    // The interrupt notice goes to stdout only; it is not reported as an error.
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Error:"));
}
