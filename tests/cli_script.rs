mod common;

use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn script_mode_runs_budget_flow() {
    let (mut cmd, _home) = common::script_cli();
    cmd.write_stdin(
        "profile Alice\n\
         income Salary 50000\n\
         expense Groceries 5000 Food\n\
         budget\n\
         exit\n",
    )
    .assert()
    .success()
    .stdout(contains("User profile created for: Alice"))
    .stdout(contains("Added income: Salary - ₹50000.00"))
    .stdout(contains("Added expense: Groceries - ₹5000.00 (Food)"))
    .stdout(contains("Remaining budget after tax: ₹42291.67"));
}

#[test]
fn errors_are_reported_and_the_shell_continues() {
    let (mut cmd, _home) = common::script_cli();
    cmd.write_stdin(
        "income Salary 100\n\
         profile Bob\n\
         income Salary abc\n\
         expense Flight 300 Travel\n\
         income Salary 100\n\
         list\n",
    )
    .assert()
    .success()
    .stdout(contains("Error: Please create a user profile first."))
    .stdout(contains("Error: Please enter a valid amount (`abc` is not a number)."))
    .stdout(contains("Error: Expense category `Travel` not found."))
    .stdout(contains("income   Salary - ₹100.00"))
    .stdout(contains("Salary - ₹100.00").count(2));
}

#[test]
fn oversized_amounts_are_rejected_before_the_budget_overflows() {
    let (mut cmd, _home) = common::script_cli();
    cmd.write_stdin(
        "profile Dana\n\
         income Lottery 1e308\n\
         income Lottery 1e308\n\
         budget\n",
    )
    .assert()
    .success()
    .stdout(contains("Error: Please enter a valid amount (`1e308` is out of range).").count(2))
    .stdout(contains("Remaining budget after tax: ₹0.00"))
    .stdout(contains("NaN").not());
}

#[test]
fn summary_json_reports_totals() {
    let (mut cmd, _home) = common::script_cli();
    let output = cmd
        .write_stdin("profile Carol\nincome Salary 1000\nexpense Rent 400 Utilities\nsummary --json\n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json_start = stdout.find('{').expect("json object in output");
    let summary: serde_json::Value = serde_json::from_str(&stdout[json_start..]).unwrap();
    assert_eq!(summary["name"], "Carol");
    assert_eq!(summary["total_income"], 1000.0);
    assert_eq!(summary["total_expenses"], 400.0);
    assert_eq!(summary["remaining_budget"], 600.0);
}

#[test]
fn configured_currency_is_used_for_display() {
    let (mut cmd, home) = common::script_cli();
    cmd.write_stdin("config set currency $\nconfig set precision 0\n")
        .assert()
        .success()
        .stdout(contains("Set currency = $"));
    assert!(home.path().join("config.json").exists());

    let mut cmd = assert_cmd::Command::cargo_bin("budget_tracker_cli").unwrap();
    cmd.env("BUDGET_TRACKER_CLI_SCRIPT", "1")
        .env("BUDGET_TRACKER_HOME", home.path())
        .write_stdin("profile Dan\nincome Salary 1234.6\n")
        .assert()
        .success()
        .stdout(contains("Added income: Salary - $1235"));
}

#[test]
fn unknown_command_suggests_closest_name() {
    let (mut cmd, _home) = common::script_cli();
    cmd.write_stdin("bugdet\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `bugdet`"))
        .stdout(contains("Suggestion: `budget`?"));
}

#[test]
fn tax_command_shows_breakdown() {
    let (mut cmd, _home) = common::script_cli();
    cmd.write_stdin("tax 50000\n")
        .assert()
        .success()
        .stdout(contains("Annual income: ₹600000.00"))
        .stdout(contains("bracket 3 of 4, 20% marginal"))
        .stdout(contains("Monthly tax:   ₹2708.33"));
}
