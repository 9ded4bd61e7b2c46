pub mod aggregation;
pub mod expense;

pub use aggregation::{
    CategorySlice, CategoryTotals, ExpenseSummary, GrowthSeries, MonthKey, MonthlyTotal,
};
pub use expense::{ExpenseCategory, ExpenseRecord, ExpenseStatus};
