//! Transaction-log reduction: totals, breakdowns, single-day sums

use chrono::{Datelike, NaiveDate};

use crate::models::{Transaction, TxKind};

use super::types::FinancialSummary;

/// Reduce the full transaction log into totals and a category breakdown
///
/// Single pass; input order does not matter. Income transactions contribute
/// to `total_income` only, expense transactions to `total_expense` and the
/// per-category map. An empty log yields an all-zero summary with an empty
/// breakdown.
pub fn summarize(transactions: &[Transaction]) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for tx in transactions {
        match tx.kind {
            TxKind::Income => summary.total_income += tx.amount,
            TxKind::Expense => {
                summary.total_expense += tx.amount;
                *summary.category_breakdown.entry(tx.category).or_insert(0) += tx.amount;
            }
        }
    }

    // Zero-total categories are omitted from the breakdown
    summary.category_breakdown.retain(|_, total| *total > 0);
    summary.balance = summary.total_income - summary.total_expense;
    summary
}

/// Expense total for one calendar date (exact date equality)
pub fn spent_on(transactions: &[Transaction], date: NaiveDate) -> i64 {
    transactions
        .iter()
        .filter(|tx| tx.kind == TxKind::Expense && tx.date == date)
        .map(|tx| tx.amount)
        .sum()
}

/// Average daily expense for the month so far, as of `as_of`
pub fn daily_average(summary: &FinancialSummary, as_of: NaiveDate) -> i64 {
    // day() is always >= 1 for a valid date
    summary.total_expense / as_of.day() as i64
}
