//! Integration tests for CLI log routing.

use super::test_utils::TestProject;
use std::process::Command;

#[test]
fn test_file_output_keeps_stdout_clean() {
    let project = TestProject::new();
    let log_path = project.dir.path().join("logs/guildcfg.log");

    let output = Command::new(env!("CARGO_BIN_EXE_guildcfg"))
        .env_remove("GUILDCFG_LOG")
        .env_remove("GUILDCFG_LOG_FORMAT")
        .env_remove("GUILDCFG_LOG_OUTPUT")
        .arg("--root")
        .arg(project.dir.path())
        .args(["--log-output", "file", "--log-file"])
        .arg(&log_path)
        .args(["resolve", "--format", "json"])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "resolve should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stdout["source"], "defaults");

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(
        content.contains("guildcfg starting"),
        "log file should contain a startup message; got: {}",
        content
    );
}

#[test]
fn test_json_log_format_to_stderr() {
    let project = TestProject::new();

    let output = Command::new(env!("CARGO_BIN_EXE_guildcfg"))
        .env_remove("GUILDCFG_LOG")
        .env_remove("GUILDCFG_LOG_OUTPUT")
        .env("GUILDCFG_LOG_FORMAT", "json")
        .arg("--root")
        .arg(project.dir.path())
        .args(["--log-output", "stderr", "resolve"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let line: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(line.get("timestamp").is_some());
    assert!(line.get("level").is_some());
}

#[test]
fn test_default_logging_leaves_json_stdout_parseable() {
    let project = TestProject::new();
    project.write_user_config(r#"{"guildName": "Bataillon"}"#);

    for args in [["resolve", "--format", "json"], ["show", "--format", "json"]] {
        let output = Command::new(env!("CARGO_BIN_EXE_guildcfg"))
            .env_remove("GUILDCFG_LOG")
            .env_remove("GUILDCFG_LOG_FORMAT")
            .env_remove("GUILDCFG_LOG_OUTPUT")
            .arg("--root")
            .arg(project.dir.path())
            .args(args)
            .output()
            .unwrap();

        assert!(output.status.success(), "{:?} failed", args);
        let stdout: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(stdout["config"]["guildName"], "Bataillon");
        assert!(String::from_utf8_lossy(&output.stderr).contains("guildcfg starting"));
    }
}
