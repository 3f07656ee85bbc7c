// porkctl/tests/cli_integration.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

/// Helper to create a credential file with the given content
fn credential_file(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write to temp file");
    file
}

#[test]
fn test_version_subcommand_prints_version() {
    let mut cmd = Command::cargo_bin("porkctl").unwrap();
    cmd.arg("version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_all_subcommands() {
    let mut cmd = Command::cargo_bin("porkctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ping"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("check-bulk"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("pricing"));
}

#[test]
fn test_no_subcommand_fails_with_usage() {
    let mut cmd = Command::cargo_bin("porkctl").unwrap();

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_check_bulk_requires_domains() {
    let mut cmd = Command::cargo_bin("porkctl").unwrap();
    cmd.arg("check-bulk");

    cmd.assert().failure();
}

#[test]
fn test_incomplete_credential_file_is_config_error() {
    // Secret key missing: the loader must fail naming the variable,
    // and the process must exit non-zero with an ERROR: line.
    let file = credential_file("PORKBUN_API_KEY=pk_live\n");

    let mut cmd = Command::cargo_bin("porkctl").unwrap();
    cmd.env("PORKCTL_ENV_FILE", file.path());
    cmd.arg("ping");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("ERROR:"))
        .stderr(predicate::str::contains("PORKBUN_SECRET_KEY"));
}

#[test]
fn test_quoted_credentials_are_accepted() {
    // Quotes must be stripped during parsing; with a well-formed file the
    // command proceeds past credential loading (any later failure is a
    // network/API error, not a configuration one).
    let file = credential_file("PORKBUN_API_KEY=\"pk_live\"\nPORKBUN_SECRET_KEY=sk_live\n");

    let mut cmd = Command::cargo_bin("porkctl").unwrap();
    cmd.env("PORKCTL_ENV_FILE", file.path());
    cmd.arg("ping");
    cmd.timeout(std::time::Duration::from_secs(60));

    let output = cmd.output().expect("failed to run porkctl");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        !stderr.contains("Configuration error"),
        "credential parsing should succeed: {}",
        stderr
    );
}

/// Live credential check against the real API. Needs network plus a valid
/// env file, so it's #[ignore] unless explicitly run.
#[test]
#[ignore]
fn test_live_ping_with_real_credentials() {
    let mut cmd = Command::cargo_bin("porkctl").unwrap();
    cmd.arg("ping");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("STATUS: OK"));
}

/// Live pricing listing: public endpoint, no credentials required.
#[test]
#[ignore]
fn test_live_pricing_table() {
    let mut cmd = Command::cargo_bin("porkctl").unwrap();
    cmd.arg("pricing");
    cmd.timeout(std::time::Duration::from_secs(60));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("TLD"))
        .stdout(predicate::str::contains("cheapest TLDs"));
}
