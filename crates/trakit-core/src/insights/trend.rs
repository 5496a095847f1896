//! Time-bucketed trends and day-of-week spending patterns

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::models::{Transaction, TxKind};

use super::summary::spent_on;
use super::types::{TrendPoint, WeekendSplit};

/// Daily expense totals for a trailing window ending at `as_of`
///
/// Yields exactly `window_days` buckets, oldest first, the last one dated
/// `as_of`. Buckets match on calendar-date equality, not range containment.
/// The iterator is lazy and restartable: each call builds a fresh sequence
/// with no state retained between calls.
pub fn daily_trend(
    transactions: &[Transaction],
    as_of: NaiveDate,
    window_days: u32,
) -> impl Iterator<Item = TrendPoint> + '_ {
    (0..window_days).rev().map(move |days_back| {
        let date = as_of - Duration::days(days_back as i64);
        TrendPoint {
            date,
            total_expense: spent_on(transactions, date),
        }
    })
}

/// Expense totals partitioned into weekday (Mon-Fri) and weekend (Sat/Sun)
///
/// Uses the calendar day-of-week, locale-independent. Totals are raw sums,
/// intentionally not normalized for the 5-vs-2 day imbalance.
pub fn weekday_weekend_split(transactions: &[Transaction]) -> WeekendSplit {
    let mut split = WeekendSplit::default();
    for tx in transactions.iter().filter(|tx| tx.kind == TxKind::Expense) {
        match tx.date.weekday() {
            Weekday::Sat | Weekday::Sun => split.weekend_total += tx.amount,
            _ => split.weekday_total += tx.amount,
        }
    }
    split
}
