//! The binary's command-line surface. None of these start the TUI.

use std::process::Command;

fn triagem() -> Command {
    Command::new(env!("CARGO_BIN_EXE_triagem"))
}

#[test]
fn test_version_flag() {
    let output = triagem().arg("--version").output().expect("Failed to execute binary");

    assert!(output.status.success(), "Version flag should exit with code 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        format!("triagem {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_short_version_flag() {
    let output = triagem().arg("-V").output().expect("Failed to execute binary");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("triagem "));
}

#[test]
fn test_help_flag_prints_usage() {
    let output = triagem().arg("--help").output().expect("Failed to execute binary");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--url"));
    assert!(stdout.contains("--field"));
}

#[test]
fn test_unknown_argument_exits_with_usage_error() {
    let output = triagem().arg("--nope").output().expect("Failed to execute binary");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown argument: --nope"));
}

#[test]
fn test_invalid_url_exits_with_usage_error() {
    let output = triagem()
        .args(["--url", "ftp://example.com"])
        .output()
        .expect("Failed to execute binary");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_invalid_environment_exits_with_usage_error() {
    let output = triagem()
        .env("TRIAGEM_TIMEOUT_SECS", "nunca")
        .output()
        .expect("Failed to execute binary");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("TRIAGEM_TIMEOUT_SECS"));
}
