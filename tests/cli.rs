use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::write;
use tempfile::NamedTempFile;

/// A config whose clean flags conflict; the error must surface before any
/// listing happens, so no credentials or network are needed.
fn create_conflicting_clean_config() -> NamedTempFile {
    let config = NamedTempFile::new().expect("Creating temp config file failed");
    write(
        config.path(),
        b"sync:\n  bucket: test-bucket\n  cleanBucket: true\n  wipeEntireBucket: true\n",
    )
    .expect("Writing temp config failed");
    config
}

#[test]
fn upload_cli_fails_for_missing_config_file() {
    let mut cmd = Command::cargo_bin("s3-sync").expect("Binary exists");
    cmd.arg("s3-upload")
        .arg("--config")
        .arg("no-such-config.yaml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn remove_cli_rejects_conflicting_clean_flags() {
    let config = create_conflicting_clean_config();
    let mut cmd = Command::cargo_bin("s3-sync").expect("Binary exists");
    cmd.arg("s3-remove").arg("--config").arg(config.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cleanBucket"));
}

#[test]
fn upload_cli_rejects_config_without_bucket() {
    let config = NamedTempFile::new().expect("temp file");
    write(config.path(), b"sync:\n  items:\n    - assets\n").unwrap();

    let mut cmd = Command::cargo_bin("s3-sync").expect("Binary exists");
    cmd.arg("s3-upload").arg("--config").arg(config.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("bucket"));
}

#[test]
fn help_lists_both_commands() {
    let mut cmd = Command::cargo_bin("s3-sync").expect("Binary exists");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("s3-upload").and(predicate::str::contains("s3-remove")));
}
