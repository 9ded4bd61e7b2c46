use serde::Serialize;

use crate::models::expense::ExpenseCategory;
use crate::money::sum_cents;

/// Calendar month grouping key. Orders by year, then month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    /// 1-based.
    pub month: u32,
}

impl MonthKey {
    pub fn month_index(&self) -> usize {
        self.month.saturating_sub(1) as usize
    }
}

/// One point of the growth line chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTotal {
    /// "MonthAbbrev Year", e.g. "Jan 2024".
    pub period_label: String,
    pub year: i32,
    pub month: u32,
    pub total_cents: i64,
    pub record_count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GrowthSeries {
    pub months: Vec<MonthlyTotal>,
    /// Records dropped because their date did not parse.
    pub skipped_records: usize,
}

impl GrowthSeries {
    pub fn total_cents(&self) -> i64 {
        sum_cents(self.months.iter().map(|m| m.total_cents))
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryTotals {
    pub fixed_cents: i64,
    pub variable_cents: i64,
    /// Sum of records outside the fixed/variable set. Never charted.
    pub uncategorized_cents: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
    pub category: ExpenseCategory,
    pub total_cents: i64,
}

impl CategoryTotals {
    pub fn get(&self, category: ExpenseCategory) -> i64 {
        match category {
            ExpenseCategory::Fixed => self.fixed_cents,
            ExpenseCategory::Variable => self.variable_cents,
        }
    }

    pub fn categorized_cents(&self) -> i64 {
        self.fixed_cents.saturating_add(self.variable_cents)
    }

    /// Pie chart slices with zero buckets dropped.
    pub fn chart_slices(&self) -> Vec<CategorySlice> {
        [ExpenseCategory::Fixed, ExpenseCategory::Variable]
            .into_iter()
            .map(|category| CategorySlice {
                category,
                total_cents: self.get(category),
            })
            .filter(|slice| slice.total_cents != 0)
            .collect()
    }
}

/// Dashboard summary cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpenseSummary {
    pub record_count: usize,
    pub total_cents: i64,
    pub paid_cents: i64,
    pub pending_cents: i64,
    pub average_cents: i64,
    pub largest_cents: i64,
}
