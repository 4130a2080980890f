//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against the dev data
//! directory and verify outputs.

use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "blaze-cli", "--"])
        .args(args)
        .env("BLAZE_ENV", "dev")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_workout_plan() {
    let (stdout, _, code) = run_cli(&["workout", "plan"]);
    assert_eq!(code, 0, "workout plan failed");
    assert!(stdout.contains("strength-a"));
    assert!(stdout.contains("hiit-metcon"));
    assert!(stdout.contains("rest-sunday"));
}

#[test]
fn test_workout_show_unknown_session_fails() {
    let (_, stderr, code) = run_cli(&["workout", "show", "leg-day-9000"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown plan session"));
}

#[test]
fn test_timer_start_and_tick() {
    let (stdout, _, code) = run_cli(&["timer", "start", "--rounds", "2", "--work", "5", "--rest", "3"]);
    assert_eq!(code, 0, "timer start failed");
    let snapshot: serde_json::Value =
        serde_json::from_str(&stdout).expect("snapshot is JSON");
    assert_eq!(snapshot["phase"], "ready");
    assert_eq!(snapshot["round"], 1);

    // Three ticks cross the countdown into work.
    let (stdout, _, code) = run_cli(&["timer", "tick", "3"]);
    assert_eq!(code, 0, "timer tick failed");
    assert!(stdout.contains("PhaseStarted"));

    let (stdout, _, code) = run_cli(&["timer", "status"]);
    assert_eq!(code, 0);
    let snapshot: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(snapshot["phase"], "work");

    // `run` on a paused timer says so instead of exiting silently.
    let (_, _, code) = run_cli(&["timer", "toggle"]);
    assert_eq!(code, 0, "timer toggle failed");
    let (stdout, _, code) = run_cli(&["timer", "run"]);
    assert_eq!(code, 0, "timer run failed");
    assert!(stdout.contains("timer is paused"));
}

#[test]
fn test_timer_start_rejects_zero_rounds() {
    let (_, _, code) = run_cli(&["timer", "start", "--rounds", "0", "--work", "5", "--rest", "3"]);
    assert_ne!(code, 0);
}

#[test]
fn test_reminders_preview() {
    let (stdout, _, code) = run_cli(&["reminders", "preview", "check-in"]);
    assert_eq!(code, 0, "reminders preview failed");
    assert!(stdout.contains("Weekly Check-in"));
    assert!(stdout.contains("07:30"));
}

#[test]
fn test_config_get_default() {
    let (stdout, _, code) = run_cli(&["config", "get", "timer.rounds"]);
    assert_eq!(code, 0, "config get failed");
    assert_eq!(stdout.trim(), "10");
}

#[test]
fn test_config_get_unknown_key_fails() {
    let (_, stderr, code) = run_cli(&["config", "get", "timer.bogus"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_nutrition_plan() {
    let (stdout, _, code) = run_cli(&["nutrition", "plan"]);
    assert_eq!(code, 0, "nutrition plan failed");
    assert!(stdout.contains("Protein Oatmeal"));
    assert!(stdout.contains("Casein Shake"));
}
