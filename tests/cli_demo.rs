use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

#[test]
fn demo_prints_balance_breakdown_and_summary() {
    let temp = tempdir().unwrap();
    Command::cargo_bin("finance_core_cli")
        .unwrap()
        .env("FINANCE_CORE_HOME", temp.path())
        .assert()
        .success()
        .stdout(contains("Current Balance: $3000.00"))
        .stdout(contains("Expense Breakdown"))
        .stdout(contains("Month: 2024-01"))
        .stdout(contains("Income: $5000.00"))
        .stdout(contains("Expenses: $2000.00"))
        .stdout(contains("Net: $3000.00"));
}

#[test]
fn demo_accumulates_across_runs() {
    let temp = tempdir().unwrap();
    for _ in 0..2 {
        Command::cargo_bin("finance_core_cli")
            .unwrap()
            .env("FINANCE_CORE_HOME", temp.path())
            .assert()
            .success();
    }
    // Each run appends the sample data to the same file.
    Command::cargo_bin("finance_core_cli")
        .unwrap()
        .env("FINANCE_CORE_HOME", temp.path())
        .assert()
        .success()
        .stdout(contains("Current Balance: $9000.00"));
}
