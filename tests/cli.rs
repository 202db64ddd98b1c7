use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "cycle";

fn cycle(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("CYCLE_BUDGET_DATA_DIR", dir.path());
    cmd.env_remove("RUST_LOG");
    cmd
}

fn with_january(dir: &TempDir) {
    cycle(dir)
        .args([
            "period", "create", "January", "--start", "2025-01-01", "--end", "2025-01-31",
            "--income", "45000", "--fixed", "12850",
        ])
        .assert()
        .success()
        .stdout(contains("Created budget period"));

    cycle(dir)
        .args([
            "transaction", "add", "expense", "1250", "-c", "groceries", "-d", "2025-01-10",
        ])
        .assert()
        .success()
        .stdout(contains("Groceries"));
}

#[test]
fn cli_init_creates_settings() {
    let dir = TempDir::new().unwrap();

    cycle(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Initialization complete"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").is_dir());

    cycle(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Active period:     (none)"));
}

#[test]
fn cli_stats_reports_rolling_daily_limit() {
    let dir = TempDir::new().unwrap();
    with_january(&dir);

    cycle(&dir)
        .args(["stats", "--as-of", "2025-01-15"])
        .assert()
        .success()
        .stdout(contains("January"))
        .stdout(contains("$1,817.65"))
        .stdout(contains("$30,900.00"));
}

#[test]
fn cli_day_shows_status_and_transactions() {
    let dir = TempDir::new().unwrap();
    with_january(&dir);

    cycle(&dir)
        .args(["day", "2025-01-10"])
        .assert()
        .success()
        .stdout(contains("Groceries"));
}

#[test]
fn cli_rejects_negative_amount() {
    let dir = TempDir::new().unwrap();

    cycle(&dir)
        .args(["transaction", "add", "expense", "-50", "-d", "2025-01-10"])
        .assert()
        .failure()
        .stderr(contains("Validation"));

    cycle(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("1250").not());
}

#[test]
fn cli_rejects_inverted_period() {
    let dir = TempDir::new().unwrap();

    cycle(&dir)
        .args([
            "period", "create", "Backwards", "--start", "2025-02-01", "--end", "2025-01-01",
            "--income", "100",
        ])
        .assert()
        .failure()
        .stderr(contains("Validation"));
}

#[test]
fn cli_stats_without_active_period_fails() {
    let dir = TempDir::new().unwrap();

    cycle(&dir)
        .arg("stats")
        .assert()
        .failure()
        .stderr(contains("No active budget period"));
}

#[test]
fn cli_demo_then_reports() {
    let dir = TempDir::new().unwrap();

    cycle(&dir)
        .arg("demo")
        .assert()
        .success()
        .stdout(contains("Demo Cycle"));

    cycle(&dir).arg("stats").assert().success().stdout(contains("Daily limit"));
    cycle(&dir).arg("calendar").assert().success().stdout(contains("Demo Cycle"));
    cycle(&dir).arg("history").assert().success().stdout(contains("Demo Cycle"));
    cycle(&dir)
        .args(["snapshot", "--json"])
        .assert()
        .success()
        .stdout(contains("\"total_income\"").and(contains("\"active_cycle\"")));

    // Seeding twice without --force must not duplicate data
    cycle(&dir).arg("demo").assert().failure();
    cycle(&dir).args(["demo", "--force"]).assert().success();
}

#[test]
fn cli_export_transactions_to_stdout() {
    let dir = TempDir::new().unwrap();
    with_january(&dir);

    cycle(&dir)
        .args(["export", "transactions"])
        .assert()
        .success()
        .stdout(contains("id,date,type,category,amount,description"))
        .stdout(contains("2025-01-10,expense,Groceries,1250.00"));
}

#[test]
fn cli_export_all_json_contains_history() {
    let dir = TempDir::new().unwrap();
    with_january(&dir);

    cycle(&dir)
        .args(["export", "all", "--pretty"])
        .assert()
        .success()
        .stdout(contains("\"schema_version\"").and(contains("\"history\"")));
}

#[test]
fn cli_period_activate_and_delete() {
    let dir = TempDir::new().unwrap();
    with_january(&dir);

    cycle(&dir)
        .args([
            "period", "create", "February", "--month", "2025-02", "--income", "1000",
        ])
        .assert()
        .success();

    cycle(&dir)
        .args(["period", "activate", "february"])
        .assert()
        .success();

    cycle(&dir)
        .args(["period", "delete", "February", "--force"])
        .assert()
        .success();

    cycle(&dir)
        .args(["stats", "--as-of", "2025-02-10"])
        .assert()
        .failure()
        .stderr(contains("No active budget period"));
}

#[test]
fn cli_rejects_malformed_amounts_without_panicking() {
    let dir = TempDir::new().unwrap();

    for amount in ["1.€", "99999999999999999", "1.-5"] {
        cycle(&dir)
            .args(["transaction", "add", "expense", amount, "-d", "2025-01-10"])
            .assert()
            .failure()
            .code(1)
            .stderr(contains("Invalid amount"))
            .stderr(contains("panicked").not());
    }

    cycle(&dir)
        .args([
            "period", "create", "Huge", "--month", "2025-03", "--income", "99999999999999999",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid amount"));
}

#[test]
fn cli_rejects_amounts_above_the_maximum() {
    let dir = TempDir::new().unwrap();

    cycle(&dir)
        .args(["transaction", "add", "expense", "46116860184273879", "-d", "2025-01-10"])
        .assert()
        .failure()
        .stderr(contains("exceeds the maximum"));

    cycle(&dir)
        .args([
            "period", "create", "Huge", "--month", "2025-03", "--income", "1000",
            "--fixed", "46116860184273879",
        ])
        .assert()
        .failure()
        .stderr(contains("exceeds the maximum"));
}

#[test]
fn cli_config_set_changes_how_values_are_printed() {
    let dir = TempDir::new().unwrap();
    with_january(&dir);

    cycle(&dir)
        .args(["config", "set", "currency_symbol", "€"])
        .assert()
        .success();
    cycle(&dir)
        .args(["config", "set", "date_format", "%d.%m.%Y"])
        .assert()
        .success();

    cycle(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("10.01.2025"))
        .stdout(contains("-€1,250.00"));

    cycle(&dir)
        .args(["config", "set", "date_format", "%H:%M"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));

    cycle(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Currency symbol:   €"));
}

#[test]
fn cli_audit_shows_recent_changes() {
    let dir = TempDir::new().unwrap();

    cycle(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("No audit entries found."));

    with_january(&dir);
    cycle(&dir)
        .args(["config", "set", "week_start", "sunday"])
        .assert()
        .success();

    cycle(&dir)
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("UPDATE"))
        .stdout(contains("first_day_of_week"))
        .stdout(contains("January").not());

    cycle(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(contains("CREATE"))
        .stdout(contains("January"));
}
