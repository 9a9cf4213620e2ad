//! End-to-end CLI tests
//!
//! Each test runs the `tally` binary against a ledger in its own temp
//! directory via the `--ledger` flag.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(temp_dir: &TempDir) -> Command {
    let ledger = temp_dir.path().join("test").to_str().unwrap().to_string();
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.arg("--ledger").arg(ledger);
    cmd
}

#[test]
fn add_then_balance() {
    let temp_dir = TempDir::new().unwrap();

    tally(&temp_dir)
        .args(["transaction", "add", "Salary", "2000", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction saved!"));

    tally(&temp_dir)
        .args(["transaction", "add", "Food", "12.345", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$12.35"));

    tally(&temp_dir)
        .args(["report", "balance"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your balance is $1987.65"));
}

#[test]
fn add_rejects_bad_kind_with_suggestion() {
    let temp_dir = TempDir::new().unwrap();

    tally(&temp_dir)
        .args(["transaction", "add", "Food", "10", "Incm"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Did you mean 'Income'?"));

    // The failed add must not have created the backing file.
    assert!(!temp_dir.path().join("test.csv").exists());
}

#[test]
fn add_rejects_non_positive_amount() {
    let temp_dir = TempDir::new().unwrap();

    tally(&temp_dir)
        .args(["transaction", "add", "Food", "-5.00", "expense"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive"));
}

#[test]
fn highest_on_empty_ledger_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();

    tally(&temp_dir)
        .args(["report", "highest", "Expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense transactions found."));
}

#[test]
fn filter_and_summary() {
    let temp_dir = TempDir::new().unwrap();

    for args in [
        ["transaction", "add", "Food", "20", "expense"],
        ["transaction", "add", "Food", "30", "expense"],
        ["transaction", "add", "Salary", "1000", "income"],
    ] {
        tally(&temp_dir).args(args).assert().success();
    }

    tally(&temp_dir)
        .args(["report", "filter", "Food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$20.00").and(predicate::str::contains("$30.00")));

    tally(&temp_dir)
        .args(["report", "filter", "Food", "--type", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));

    tally(&temp_dir)
        .args(["report", "summary", "expense", "--frequency", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$50.00"));
}

#[test]
fn ledger_persists_across_invocations() {
    let temp_dir = TempDir::new().unwrap();

    tally(&temp_dir)
        .args(["transaction", "add", "Books", "15.5", "expense"])
        .assert()
        .success();

    tally(&temp_dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Books").and(predicate::str::contains("$15.50")));

    let contents = std::fs::read_to_string(temp_dir.path().join("test.csv")).unwrap();
    assert!(contents.starts_with("Date,Category,Amount,Type\n"));
}

#[test]
fn config_reports_ledger_path() {
    let temp_dir = TempDir::new().unwrap();

    tally(&temp_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("test.csv"));
}
