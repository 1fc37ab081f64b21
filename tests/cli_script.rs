mod common;

use assert_cmd::Command;
use predicates::str::contains;

fn cli(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("spend_tracker_cli").unwrap();
    cmd.env("SPEND_TRACKER_CLI_SCRIPT", "1")
        .env("SPEND_TRACKER_HOME", home)
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn script_mode_runs_basic_flow() {
    let home = common::temp_home();
    let input = "add income 5000 Salary \"Monthly salary\"\n\
                 add expense 1200 Food Groceries\n\
                 budget 1000\n\
                 summary\n\
                 exit\n";

    cli(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Balance:      ₦3,800.00"))
        .stdout(contains("Top spending: Food (₦1,200.00)"))
        .stdout(contains("[!] Budget exceeded: spent ₦1,200.00 of ₦1,000.00"));

    let saved = std::fs::read_to_string(home.join("transactions.json")).unwrap();
    assert!(saved.contains("\"Monthly salary\""));
    let budget = std::fs::read_to_string(home.join("monthlyBudget.json")).unwrap();
    assert_eq!(budget, "1000");
}

#[test]
fn ledger_is_reloaded_between_runs() {
    let home = common::temp_home();
    cli(&home)
        .write_stdin("add expense 300 Food Rice\nadd expense 500 Transport Bus\nexit\n")
        .assert()
        .success();

    cli(&home)
        .write_stdin("list all expense\nchart\n")
        .assert()
        .success()
        .stdout(contains("#1    Rice (Food) -₦300.00"))
        .stdout(contains("#2    Bus (Transport) -₦500.00"))
        .stdout(contains("Spending by category"));
}

#[test]
fn invalid_input_is_reported_and_the_session_continues() {
    let home = common::temp_home();
    cli(&home)
        .write_stdin("add expense abc Food Lunch\nsumary\nlist\n")
        .assert()
        .success()
        .stderr(contains("`abc` is not a number"))
        .stdout(contains("Did you mean `summary`?"))
        .stdout(contains("No transactions."));
}

#[test]
fn config_changes_persist_between_runs() {
    let home = common::temp_home();
    cli(&home)
        .write_stdin("config set currency usd\n")
        .assert()
        .success()
        .stdout(contains("[ok] Set currency to usd."));

    cli(&home)
        .write_stdin("add income 10 Salary Pay\nsummary\nrm 1\nls\n")
        .assert()
        .success()
        .stdout(contains("Balance:      $10.00"))
        .stdout(contains("Removed #1"))
        .stdout(contains("No transactions."));
}
