//! Date-range filtering and grouping of expense records for the dashboard charts.
//!
//! Every function here is a pure transformation of its inputs. `today` is
//! passed in by the caller so one filtering pass always sees a single,
//! stable interval. Totals saturate at `i64::MAX`/`i64::MIN` cents rather
//! than overflow.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, trace, warn};

use crate::date_utils::{DateRange, TimeRangeSelector};
use crate::locale::Locale;
use crate::models::{
    CategoryTotals, ExpenseCategory, ExpenseRecord, ExpenseSummary, GrowthSeries, MonthKey,
    MonthlyTotal,
};
use crate::money::sum_cents;

/// Records whose date falls inside the selector's interval, in input order.
///
/// [`TimeRangeSelector::All`] returns every record, including those with
/// malformed dates. Bounded ranges exclude records whose date does not parse.
pub fn filter_by_range<'a>(
    records: &'a [ExpenseRecord],
    selector: &TimeRangeSelector,
    today: NaiveDate,
) -> Vec<&'a ExpenseRecord> {
    let Some(range) = DateRange::resolve(selector, today) else {
        return records.iter().collect();
    };

    trace!(from = %range.from, to = %range.to, "Filtering expense records");

    let filtered: Vec<&ExpenseRecord> = records
        .iter()
        .filter(|record| match record.parsed_date() {
            Some(date) => range.contains(date),
            None => {
                debug!(id = %record.id, date = %record.date, "Excluding record with malformed date");
                false
            }
        })
        .collect();

    debug!(
        selector = selector.as_str(),
        total = records.len(),
        kept = filtered.len(),
        "Filtered expense records"
    );
    filtered
}

/// Per-month totals in chronological order, for the growth line chart.
pub fn growth_series(
    records: &[ExpenseRecord],
    selector: &TimeRangeSelector,
    today: NaiveDate,
    locale: Locale,
) -> GrowthSeries {
    group_by_month(filter_by_range(records, selector, today), locale)
}

fn group_by_month<'a>(
    records: impl IntoIterator<Item = &'a ExpenseRecord>,
    locale: Locale,
) -> GrowthSeries {
    let mut monthly: BTreeMap<MonthKey, (i64, usize)> = BTreeMap::new();
    let mut skipped_records = 0;

    for record in records {
        let Some(date) = record.parsed_date() else {
            warn!(id = %record.id, date = %record.date, "Skipping record with malformed date");
            skipped_records += 1;
            continue;
        };

        let key = MonthKey {
            year: date.year(),
            month: date.month(),
        };
        let entry = monthly.entry(key).or_insert((0, 0));
        entry.0 = entry.0.saturating_add(record.value_cents);
        entry.1 += 1;
    }

    let months = monthly
        .into_iter()
        .map(|(key, (total_cents, record_count))| MonthlyTotal {
            period_label: period_label(key, locale),
            year: key.year,
            month: key.month,
            total_cents,
            record_count,
        })
        .collect();

    GrowthSeries {
        months,
        skipped_records,
    }
}

fn period_label(key: MonthKey, locale: Locale) -> String {
    let month = locale.month_abbreviation(key.month_index()).unwrap_or("?");
    format!("{} {:04}", month, key.year)
}

/// Fixed vs. variable totals for the proportion chart.
///
/// Records with categories outside the closed set go to
/// `uncategorized_cents` and never into either chart bucket.
pub fn category_totals(
    records: &[ExpenseRecord],
    selector: &TimeRangeSelector,
    today: NaiveDate,
) -> CategoryTotals {
    let mut totals = CategoryTotals::default();

    for record in filter_by_range(records, selector, today) {
        match record.category_kind() {
            Some(ExpenseCategory::Fixed) => {
                totals.fixed_cents = totals.fixed_cents.saturating_add(record.value_cents)
            }
            Some(ExpenseCategory::Variable) => {
                totals.variable_cents = totals.variable_cents.saturating_add(record.value_cents)
            }
            None => {
                trace!(id = %record.id, category = %record.category, "Uncategorized expense");
                totals.uncategorized_cents =
                    totals.uncategorized_cents.saturating_add(record.value_cents);
            }
        }
    }

    totals
}

/// Headline numbers for the dashboard cards.
pub fn expense_summary(
    records: &[ExpenseRecord],
    selector: &TimeRangeSelector,
    today: NaiveDate,
) -> ExpenseSummary {
    let filtered = filter_by_range(records, selector, today);
    if filtered.is_empty() {
        return ExpenseSummary::default();
    }

    let record_count = filtered.len();
    let total_cents = sum_cents(filtered.iter().map(|r| r.value_cents));
    let paid_cents = sum_cents(filtered.iter().filter(|r| r.is_paid()).map(|r| r.value_cents));
    let pending_cents =
        sum_cents(filtered.iter().filter(|r| !r.is_paid()).map(|r| r.value_cents));
    let largest_cents = filtered.iter().map(|r| r.value_cents).max().unwrap_or(0);

    ExpenseSummary {
        record_count,
        total_cents,
        paid_cents,
        pending_cents,
        average_cents: total_cents / record_count as i64,
        largest_cents,
    }
}
