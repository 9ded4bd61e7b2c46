//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use codi_cash::date_utils::parse_date;
use codi_cash::models::{ExpenseRecord, ExpenseStatus};

/// Build a record with an amount given in whole currency units.
pub fn expense(id: &str, date: &str, category: &str, value: i64) -> ExpenseRecord {
    ExpenseRecord {
        id: id.into(),
        date: date.into(),
        description: format!("Expense {}", id),
        category: category.into(),
        value_cents: value * 100,
        status: ExpenseStatus::Pending,
    }
}

pub fn date(s: &str) -> NaiveDate {
    parse_date(s).expect("valid fixture date")
}

/// The three records used throughout the chart scenarios.
pub fn scenario_records() -> Vec<ExpenseRecord> {
    vec![
        expense("1", "2024-01-10", "Fixa", 100),
        expense("2", "2024-01-20", "Variavel", 50),
        expense("3", "2024-02-05", "Fixa", 75),
    ]
}

/// Data spanning a year boundary, with one uncategorized record.
///
/// Against a `today` of 2024-03-15, `w` sits exactly on the last-week start
/// and `v` one day before it.
pub fn mixed_records() -> Vec<ExpenseRecord> {
    vec![
        expense("a", "2023-11-30", "Fixa", 1200),
        expense("b", "2023-12-15", "Variavel", 80),
        expense("c", "2024-01-02", "fixed", 1200),
        expense("d", "2024-01-31", "Outro", 30),
        expense("e", "2024-02-29", "VARIABLE", 45),
        expense("f", "2024-03-01", "Variavel", 60),
        expense("v", "2024-03-07", "Variavel", 5),
        expense("w", "2024-03-08", "Fixa", 10),
        expense("g", "2024-03-14", "Fixa", 1200),
        expense("h", "2024-03-15", "Variavel", 25),
    ]
}

pub const SCENARIO_JSON: &str = r#"[
    {"id": 1, "date": "2024-01-10", "description": "Aluguel", "category": "Fixa", "value": 100, "status": "Pago"},
    {"id": 2, "date": "2024-01-20", "description": "Mercado", "category": "Variavel", "value": 50, "status": "Pendente"},
    {"id": 3, "date": "2024-02-05", "description": "Internet", "category": "Fixa", "value": 75, "status": "Pendente"}
]"#;
