//! Integration tests for the `codi-cash` command line.

mod common;

use assert_cmd::Command;
use common::SCENARIO_JSON;
use predicates::prelude::*;
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("expenses.json"), SCENARIO_JSON)
            .expect("Failed to write fixture");
        Self { dir }
    }

    fn write(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).expect("Failed to write fixture");
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("codi-cash").expect("binary exists");
        cmd.current_dir(self.dir.path())
            .env_remove("CODI_CASH_LOCALE")
            .env_remove("CODI_CASH_CURRENCY")
            .env("CODI_CASH_DATA_PATH", self.dir.path().join("expenses.json"))
            .env("RUST_LOG", "codi_cash=warn");
        cmd
    }
}

/// Growth chart data as JSON.
#[test]
fn test_growth_json() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["growth", "--format", "json", "--range", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""period_label": "Jan 2024""#))
        .stdout(predicate::str::contains(r#""total_cents": 15000"#))
        .stdout(predicate::str::contains(r#""period_label": "Fev 2024""#))
        .stdout(predicate::str::contains(r#""skipped_records": 0"#));
}

/// English labels on request.
#[test]
fn test_growth_text_english() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["growth", "--locale", "en-US"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Feb 2024"))
        .stdout(predicate::str::contains("R$225.00"));
}

/// Category totals for a custom range.
#[test]
fn test_categories_custom_range() {
    let ws = Workspace::new();
    ws.cmd()
        .args([
            "categories",
            "--format",
            "json",
            "--from",
            "2024-01-15",
            "--to",
            "2024-01-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""fixed_cents": 0"#))
        .stdout(predicate::str::contains(r#""variable_cents": 5000"#));
}

/// Named ranges are evaluated against `--today`.
#[test]
fn test_this_month_with_pinned_today() {
    let ws = Workspace::new();
    ws.cmd()
        .args([
            "filter",
            "--format",
            "json",
            "--range",
            "this_month",
            "--today",
            "2024-01-25",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-10"))
        .stdout(predicate::str::contains("2024-01-20"))
        .stdout(predicate::str::contains("2024-02-05").not());
}

/// Unknown presets fall back to the full record set.
#[test]
fn test_unknown_range_falls_back_to_all() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["summary", "--format", "json", "--range", "fortnight"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""record_count": 3"#))
        .stderr(predicate::str::contains("Unknown time range preset"));
}

/// CSV files are read by extension.
#[test]
fn test_csv_file() {
    let ws = Workspace::new();
    ws.write(
        "expenses.csv",
        "date,description,category,value,status\n\
         2024-01-10,Aluguel,Fixa,100,Pago\n\
         2024-01-20,Mercado,Variavel,\"50,00\",Pendente\n",
    );
    ws.cmd()
        .args(["categories", "--file", "expenses.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixa"))
        .stdout(predicate::str::contains("100,00"));
}

/// A JSON object instead of an array means no records, not a failure.
#[test]
fn test_non_array_json_is_empty() {
    let ws = Workspace::new();
    ws.write("object.json", r#"{"date": "2024-01-10", "value": 100}"#);
    ws.cmd()
        .args(["growth", "--format", "json", "--file", "object.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""months": []"#));
}

/// Missing data file is reported as an error.
#[test]
fn test_missing_file_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["growth", "--file", "nope.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}

/// Invalid `--today` is rejected.
#[test]
fn test_invalid_today_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["summary", "--today", "25/01/2024"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --today date"));
}

/// Unsupported locale is rejected.
#[test]
fn test_invalid_locale_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["summary", "--locale", "fr-FR"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported locale"));
}

/// Last week near the earliest representable date does not crash.
#[test]
fn test_last_week_at_earliest_today() {
    let ws = Workspace::new();
    ws.cmd()
        .args([
            "summary",
            "--format",
            "json",
            "--range",
            "last_week",
            "--today=-262143-01-03",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""record_count": 0"#));
}
