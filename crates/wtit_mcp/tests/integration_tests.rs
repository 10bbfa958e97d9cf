use assert_cmd::Command;
use predicates::prelude::*;

/// Test CLI help output
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("mcp-server-wtit").unwrap();
    let assert = cmd.arg("--help").assert();

    assert
        .success()
        .stdout(predicate::str::contains("--timezone"))
        .stdout(predicate::str::contains("--no-milliseconds"));
}

/// Test CLI version output
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("mcp-server-wtit").unwrap();
    let assert = cmd.arg("--version").assert();

    assert
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// An unknown default timezone stops the server before it starts serving
#[test]
fn test_invalid_default_timezone() {
    let mut cmd = Command::cargo_bin("mcp-server-wtit").unwrap();
    let assert = cmd
        .args(["--timezone", "Invalid/Timezone"])
        .env_remove("WTIT_DEFAULT_TIMEZONE")
        .assert();

    assert
        .failure()
        .stderr(predicate::str::contains("Invalid/Timezone"));
}

/// The environment variable is validated the same way as the flag
#[test]
fn test_invalid_default_timezone_from_env() {
    let mut cmd = Command::cargo_bin("mcp-server-wtit").unwrap();
    let assert = cmd.env("WTIT_DEFAULT_TIMEZONE", "Not/AZone").assert();

    assert.failure().stderr(predicate::str::contains("Not/AZone"));
}
