//! Plain-text and JSON rendering of aggregation results.

use std::fmt::Write;

use serde::Serialize;

use crate::error::AppResult;
use crate::locale::Locale;
use crate::models::{CategoryTotals, ExpenseCategory, ExpenseRecord, ExpenseSummary, GrowthSeries};
use crate::money::{format_money, sum_cents};

#[derive(Debug, Clone, Copy)]
pub struct ReportStyle<'a> {
    pub locale: Locale,
    pub currency: &'a str,
}

impl ReportStyle<'_> {
    fn money(&self, cents: i64) -> String {
        format_money(cents, self.currency, self.locale)
    }
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

pub fn category_label(category: ExpenseCategory, locale: Locale) -> &'static str {
    match (category, locale) {
        (ExpenseCategory::Fixed, Locale::PtBr) => "Fixa",
        (ExpenseCategory::Fixed, Locale::EnUs) => "Fixed",
        (ExpenseCategory::Variable, Locale::PtBr) => "Variável",
        (ExpenseCategory::Variable, Locale::EnUs) => "Variable",
    }
}

pub fn render_records(records: &[&ExpenseRecord], style: ReportStyle<'_>) -> String {
    let mut out = String::new();
    for record in records {
        let _ = writeln!(
            out,
            "{:<10}  {:<24}  {:<10}  {:>14}  {}",
            record.date,
            record.description,
            record.category,
            style.money(record.value_cents),
            record.status
        );
    }
    let total = sum_cents(records.iter().map(|r| r.value_cents));
    let _ = writeln!(out, "{} record(s), {}", records.len(), style.money(total));
    out
}

pub fn render_growth(series: &GrowthSeries, style: ReportStyle<'_>) -> String {
    let mut out = String::new();
    for month in &series.months {
        let _ = writeln!(
            out,
            "{:<10}  {:>14}  ({})",
            month.period_label,
            style.money(month.total_cents),
            month.record_count
        );
    }
    let _ = writeln!(out, "{:<10}  {:>14}", "Total", style.money(series.total_cents()));
    if series.skipped_records > 0 {
        let _ = writeln!(
            out,
            "{} record(s) skipped: malformed date",
            series.skipped_records
        );
    }
    out
}

pub fn render_categories(totals: &CategoryTotals, style: ReportStyle<'_>) -> String {
    let mut out = String::new();
    for category in [ExpenseCategory::Fixed, ExpenseCategory::Variable] {
        let _ = writeln!(
            out,
            "{:<10}  {:>14}",
            category_label(category, style.locale),
            style.money(totals.get(category))
        );
    }
    if totals.uncategorized_cents != 0 {
        let _ = writeln!(
            out,
            "{} outside fixed/variable",
            style.money(totals.uncategorized_cents)
        );
    }
    out
}

pub fn render_summary(summary: &ExpenseSummary, style: ReportStyle<'_>) -> String {
    let rows = [
        ("Total", summary.total_cents),
        ("Paid", summary.paid_cents),
        ("Pending", summary.pending_cents),
        ("Average", summary.average_cents),
        ("Largest", summary.largest_cents),
    ];
    let mut out = String::new();
    let _ = writeln!(out, "{:<10}  {:>14}", "Records", summary.record_count);
    for (label, cents) in rows {
        let _ = writeln!(out, "{:<10}  {:>14}", label, style.money(cents));
    }
    out
}
