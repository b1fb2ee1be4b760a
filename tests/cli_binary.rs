//! Tests for the non-interactive commands, run through the built binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Run the binary with an isolated config file path and `input` on stdin.
fn run(args: &[&str], input: &str) -> Output {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = temp_dir.path().join("config.toml");
    let mut child = Command::new(env!("CARGO_BIN_EXE_text-utils"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");
    // The child may exit before reading (argument errors), so a broken
    // pipe here is expected.
    let _ = child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input.as_bytes());
    child.wait_with_output().expect("Failed to wait")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_text-utils"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    let text = stdout(&output);
    assert!(text.contains("transform"));
    assert!(text.contains("stats"));
    assert!(text.contains("--dark"));
}

#[test]
fn test_transform_uppercase() {
    let output = run(&["transform", "uppercase"], "Hi There\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "HI THERE\n");
}

#[test]
fn test_transform_remove_extra_spaces() {
    let output = run(&["transform", "remove-extra-spaces"], "  a   b  \n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "a b\n");
}

#[test]
fn test_transform_blank_input_fails() {
    let output = run(&["transform", "lowercase"], "   \n");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Text area is empty!"));
}

#[test]
fn test_transform_unknown_action_fails() {
    let output = run(&["transform", "reverse"], "text");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown action 'reverse'"));
}

#[test]
fn test_stats_json() {
    let output = run(&["stats", "--json"], "hello world");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(stdout(&output).trim()).unwrap();
    assert_eq!(value["words"], 2);
    assert_eq!(value["characters"], 11);
    assert_eq!(value["reading_time_seconds"], 1);
}

#[test]
fn test_stats_text_on_empty_input() {
    let output = run(&["stats"], "");
    assert!(output.status.success());
    assert!(stdout(&output).contains("No. of words : 0"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("config.toml");
    std::fs::write(&config, "[notifications]\nduration_ms = 0\n").unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_text-utils"))
        .arg("--config")
        .arg(&config)
        .arg("stats")
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}
