//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs. Every test
//! points WORKTIMER_CONFIG at a path it controls so host configuration
//! cannot leak in.

use std::io::Write;
use std::process::Command;

/// Run a CLI command with a given config path and return output.
fn run_cli(args: &[&str], config_path: &str) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "worktimer-cli", "--quiet", "--"])
        .args(args)
        .env("WORKTIMER_CONFIG", config_path)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// A config path that does not exist, so defaults apply.
fn no_config() -> String {
    std::env::temp_dir()
        .join("worktimer-test-no-config.toml")
        .display()
        .to_string()
}

#[test]
fn help_lists_subcommands() {
    let (stdout, _, code) = run_cli(&["--help"], &no_config());
    assert_eq!(code, 0);
    assert!(stdout.contains("start"));
    assert!(stdout.contains("config"));
    assert!(stdout.contains("completions"));
}

#[test]
fn start_json_emits_full_event_sequence() {
    let (stdout, stderr, code) =
        run_cli(&["start", "1", "1", "--json", "--no-sound"], &no_config());
    assert_eq!(code, 0, "session run failed: {stderr}");

    let types: Vec<String> = stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            let event: serde_json::Value =
                serde_json::from_str(l).unwrap_or_else(|_| panic!("not JSON: {l}"));
            event["type"].as_str().unwrap().to_string()
        })
        .collect();

    assert_eq!(
        types,
        ["SessionStarted", "PhaseCompleted", "PhaseCompleted"],
        "unexpected event sequence: {stdout}"
    );

    // The two completions are workout then rest.
    let phases: Vec<String> = stdout
        .lines()
        .filter(|l| l.contains("PhaseCompleted"))
        .map(|l| {
            let event: serde_json::Value = serde_json::from_str(l).unwrap();
            event["phase"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(phases, ["workout", "rest"]);
}

#[test]
fn start_rejects_non_numeric_duration() {
    let (_, stderr, code) = run_cli(&["start", "abc", "2"], &no_config());
    assert_ne!(code, 0);
    assert!(
        stderr.contains("invalid value"),
        "expected a parse error, got: {stderr}"
    );
}

#[test]
fn start_rejects_zero_workout() {
    let (_, stderr, code) = run_cli(&["start", "0", "5"], &no_config());
    assert_ne!(code, 0);
    assert!(
        stderr.contains("workout_secs"),
        "expected a validation error, got: {stderr}"
    );
}

#[test]
fn config_show_reflects_file_values() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[durations]\nworkout_secs = 7\nrest_secs = 3").unwrap();

    let (stdout, stderr, code) = run_cli(&["config", "show"], &file.path().display().to_string());
    assert_eq!(code, 0, "config show failed: {stderr}");

    let config: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(config["durations"]["workout_secs"], 7);
    assert_eq!(config["durations"]["rest_secs"], 3);
    assert_eq!(config["notifications"]["enabled"], true);
}

#[test]
fn config_get_resolves_dot_path() {
    let (stdout, _, code) = run_cli(&["config", "get", "durations.workout_secs"], &no_config());
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "30");
}

#[test]
fn config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "durations.bogus"], &no_config());
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown key"));
}

#[test]
fn config_path_honors_env_override() {
    let (stdout, _, code) = run_cli(&["config", "path"], "/tmp/worktimer-override.toml");
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "/tmp/worktimer-override.toml");
}

#[test]
fn malformed_config_is_reported() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "this is not toml [").unwrap();

    let (_, stderr, code) = run_cli(&["config", "show"], &file.path().display().to_string());
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"), "expected an error, got: {stderr}");
}
