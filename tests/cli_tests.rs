//! CLI integration tests using assert_cmd.
//!
//! Flag parsing and validation only; a seeded end-to-end run lives here
//! too but is kept to a single 2048-bit prime to stay fast.

use assert_cmd::Command;
use predicates::prelude::*;

fn primeforge() -> Command {
    Command::cargo_bin("primeforge").unwrap()
}

#[test]
fn help_shows_all_flags() {
    primeforge().arg("--help").assert().success().stdout(
        predicate::str::contains("--bits")
            .and(predicate::str::contains("--accuracy"))
            .and(predicate::str::contains("--seed"))
            .and(predicate::str::contains("--count")),
    );
}

#[test]
fn unknown_flag_fails() {
    primeforge()
        .arg("--nonexistent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn non_numeric_bits_fails() {
    primeforge()
        .args(["--bits", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn seeded_run_prints_one_decimal_prime() {
    // 2048-bit primes have 617 decimal digits.
    primeforge()
        .args(["--seed", "42"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{617}\n$").unwrap());
}

#[test]
fn seeded_runs_are_reproducible() {
    let first = primeforge().args(["--seed", "7"]).output().unwrap();
    let second = primeforge().args(["--seed", "7"]).output().unwrap();
    assert!(first.status.success() && second.status.success());
    assert_eq!(first.stdout, second.stdout);
}
