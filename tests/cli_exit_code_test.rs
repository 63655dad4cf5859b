//! End-to-end tests of the anonlog binary's exit behaviour

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const LINE: &str = "7\talice\tx\tx\tx\t10.0.0.5\tx\tx\tx\tx\tx\tx\tHASHED_ALICE\n";

fn anonlog() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_anonlog"));
    cmd.env_remove("RUST_LOG")
        .env_remove("ANONLOG_LOG")
        .env_remove("ANONLOG_DELIMITER")
        .env_remove("ANONLOG_CONFIG");
    cmd
}

#[test]
fn test_success_exits_zero() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.tsv");
    let output = dir.path().join("out.tsv");
    let report = dir.path().join("report.json");
    fs::write(&input, format!("{LINE}{LINE}")).unwrap();

    let status = anonlog()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--report")
        .arg(&report)
        .status()
        .unwrap();

    assert!(status.success());
    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with("7\tHASHED_ALICE\t"));

    let summary: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(summary["records_written"], 2);
    assert_eq!(summary["distinct_ips"], 1);
}

#[test]
fn test_invalid_log_level_fails_before_io() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.tsv");
    let output = dir.path().join("out.tsv");
    fs::write(&input, LINE).unwrap();

    let result = anonlog()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["-l", "LOUD"])
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Invalid Log Level"));
    assert!(!output.exists());
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let status = anonlog()
        .arg("-i")
        .arg(dir.path().join("missing.tsv"))
        .arg("-o")
        .arg(dir.path().join("out.tsv"))
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(3));
}

#[test]
fn test_strict_short_record_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.tsv");
    fs::write(&input, "1\tshort\n").unwrap();

    let status = anonlog()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("out.tsv"))
        .arg("--strict")
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(4));
}

#[test]
fn test_malformed_ip_warning_names_record() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.tsv");
    let output = dir.path().join("out.tsv");
    let bad = "ROW42\tbob\tx\tx\tx\tnot-an-ip\tx\tx\tx\tx\tx\tx\tHASHED_BOB\n";
    fs::write(&input, format!("{bad}{LINE}")).unwrap();

    let result = anonlog()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Malformed IP address on line ROW42"), "stderr: {stderr}");

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(!text.contains("ROW42"));
    assert!(text.starts_with("7\tHASHED_ALICE\t"));
}

#[test]
fn test_short_record_warning_under_default_policy() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.tsv");
    let output = dir.path().join("out.tsv");
    fs::write(&input, format!("ROW7\tshort\n{LINE}")).unwrap();

    let result = anonlog()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(
        stderr.contains("Record ROW7 has 2 fields, at least 13 required"),
        "stderr: {stderr}"
    );

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(!text.contains("ROW7"));
}

#[test]
fn test_failure_reported_once() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.tsv");

    let result = anonlog()
        .arg("-i")
        .arg(&missing)
        .arg("-o")
        .arg(dir.path().join("out.tsv"))
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert_eq!(stderr.matches("Anonymization failed").count(), 1, "stderr: {stderr}");
    assert_eq!(stderr.matches("os error").count(), 1, "stderr: {stderr}");
}
