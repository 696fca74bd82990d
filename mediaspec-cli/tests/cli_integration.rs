// mediaspec-cli/tests/cli_integration.rs

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use tempfile::tempdir;

fn mediaspec_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mediaspec").expect("Failed to find mediaspec binary");
    cmd.env_remove("MEDIASPEC_VALIDATION_MODE")
        .env_remove("MEDIASPEC_ALLOW_UNKNOWN_TOKENS")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_kinds_lists_records() {
    mediaspec_cmd()
        .arg("kinds")
        .assert()
        .success()
        .stdout(contains("h264-settings"))
        .stdout(contains("CmafGroupSettings"))
        .stdout(contains("m2ts-settings"));
}

#[test]
fn test_fields_shows_tokens_and_ranges() {
    mediaspec_cmd()
        .args(["fields", "H264Settings"])
        .assert()
        .success()
        .stdout(contains("RateControlMode"))
        .stdout(contains("rateControlMode"))
        .stdout(contains("VBR, CBR, QVBR"))
        .stdout(contains("1000..=1152000000"));
}

#[test]
fn test_unknown_kind_is_rejected() {
    mediaspec_cmd()
        .args(["fields", "av1-settings"])
        .assert()
        .failure()
        .stderr(contains("Unknown record kind"));
}

#[test]
fn test_describe_prints_dump() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("h264.json");
    fs::write(&path, r#"{ "rateControlMode": "QVBR", "qvbrSettings": { "qvbrQualityLevel": 7 } }"#)?;

    mediaspec_cmd()
        .arg("describe")
        .arg("h264-settings")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("{QvbrSettings: {QvbrQualityLevel: 7},RateControlMode: QVBR}"));
    Ok(())
}

#[test]
fn test_describe_missing_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    mediaspec_cmd()
        .arg("describe")
        .arg("vp9-settings")
        .arg(dir.path().join("missing.json"))
        .assert()
        .failure()
        .stderr(contains("Failed to read"));
    Ok(())
}

#[test]
fn test_set_prints_json_to_stdout() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("new.json");

    mediaspec_cmd()
        .arg("set")
        .arg("h264-settings")
        .arg(&path)
        .args(["RateControlMode=QVBR", "max_bitrate=6000000", "Slices=2"])
        .assert()
        .success()
        .stdout(contains("\"rateControlMode\": \"QVBR\""))
        .stdout(contains("\"maxBitrate\": 6000000"))
        .stdout(contains("\"slices\": 2"));

    // Without --output nothing is written
    assert!(!path.exists());
    Ok(())
}

#[test]
fn test_set_writes_output_file() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("m2ts.json");
    let output = dir.path().join("out").join("m2ts.json");
    fs::write(&input, r#"{ "videoPid": 481, "pmtPid": 480 }"#)?;

    mediaspec_cmd()
        .arg("set")
        .arg("m2ts-settings")
        .arg(&input)
        .arg("AudioPids=[482,483]")
        .args(["--clear", "PmtPid"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let written = fs::read_to_string(&output)?;
    assert!(written.contains("\"videoPid\": 481"));
    assert!(written.contains("\"audioPids\""));
    assert!(!written.contains("pmtPid"));
    Ok(())
}

#[test]
fn test_set_rejects_bad_values() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    mediaspec_cmd()
        .arg("set")
        .arg("h264-settings")
        .arg(dir.path().join("h264.json"))
        .arg("Bitrate=fast")
        .assert()
        .failure()
        .stderr(contains("Invalid value for H264Settings.Bitrate"));

    mediaspec_cmd()
        .arg("set")
        .arg("h264-settings")
        .arg(dir.path().join("h264.json"))
        .arg("Crf=23")
        .assert()
        .failure()
        .stderr(contains("H264Settings has no field named 'Crf'"));
    Ok(())
}

#[test]
fn test_validate_reports_violations_leniently() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let good = dir.path().join("good.json");
    let bad = dir.path().join("bad.json");
    fs::write(&good, r#"{ "rateControlMode": "QVBR", "maxBitrate": 5000000 }"#)?;
    fs::write(&bad, r#"{ "bitrate": 500, "rateControlMode": "ABR" }"#)?;

    mediaspec_cmd()
        .arg("validate")
        .arg("h264-settings")
        .arg(&good)
        .arg(&bad)
        .assert()
        .success()
        .stdout(contains("good.json: H264Settings is valid"))
        .stdout(contains("bad.json: H264Settings has 2 violation(s)"))
        .stdout(contains("Bitrate: 500 is outside 1000..=1152000000"))
        .stdout(contains("unknown token 'ABR'"));
    Ok(())
}

#[test]
fn test_validate_strict_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let bad = dir.path().join("bad.json");
    fs::write(&bad, r#"{ "gopSize": 0.5, "rateControlMode": "ABR" }"#)?;

    mediaspec_cmd()
        .args(["validate", "vp9-settings", "--strict"])
        .arg(&bad)
        .assert()
        .failure()
        .stderr(contains("1 of 1 document(s) failed validation"));
    Ok(())
}

#[test]
fn test_validate_strict_can_allow_unknown_tokens() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("h264.json");
    fs::write(&path, r#"{ "rateControlMode": "ABR" }"#)?;

    mediaspec_cmd()
        .args(["validate", "h264-settings", "--strict", "--allow-unknown-tokens"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("is valid"));

    mediaspec_cmd()
        .env("MEDIASPEC_VALIDATION_MODE", "strict")
        .args(["validate", "h264-settings"])
        .arg(&path)
        .assert()
        .failure()
        .stdout(contains("failed validation"));
    Ok(())
}

#[test]
fn test_validate_requires_files() {
    mediaspec_cmd()
        .args(["validate", "h264-settings"])
        .assert()
        .failure()
        .stderr(contains("required").or(contains("FILE")));
}
