// CLI surface smoke tests. Only --help invocations: anything else would
// reach for the emulated endpoint.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_the_choreography() {
    let mut cmd = Command::cargo_bin("object-relay").unwrap();

    // --help renders the long description.
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Object Relay uploads an object"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("publish"))
        .stdout(predicate::str::contains("consume"));
}

#[test]
fn test_short_help_shows_the_summary() {
    let mut cmd = Command::cargo_bin("object-relay").unwrap();

    // -h renders the one-line about.
    cmd.arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Relay an object through emulated S3 and SQS"));
}

#[test]
fn test_run_help_lists_overrides() {
    let mut cmd = Command::cargo_bin("object-relay").unwrap();

    cmd.args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bucket"))
        .stdout(predicate::str::contains("--key"))
        .stdout(predicate::str::contains("--content"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin("object-relay").unwrap();

    cmd.arg("replay").assert().failure();
}
