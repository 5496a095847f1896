//! Financial aggregation engine
//!
//! Pure functions that turn the transaction log (and goals) into the derived
//! metrics every view depends on: totals and category breakdowns, budget
//! progress, safe-to-spend, a heuristic health score, daily trends, and goal
//! pacing.
//!
//! Every operation here is total and deterministic: no I/O, no hidden state,
//! no errors. Degenerate arithmetic (zero days remaining, met goals) degrades
//! to zero rather than failing, since these numbers feed directly into
//! user-facing views. Input slices are never assumed to be sorted.

mod budget;
mod pace;
mod summary;
mod trend;
mod types;

pub use budget::{budget_progress, estimated_budget, health_score, overspend, safe_daily_spend};
pub use pace::goal_pace;
pub use summary::{daily_average, spent_on, summarize};
pub use trend::{daily_trend, weekday_weekend_split};
pub use types::{BudgetPolicy, FinancialSummary, TrendPoint, WeekendSplit};

use chrono::{Datelike, NaiveDate};

/// Number of days in `date`'s month
pub fn days_in_month(date: NaiveDate) -> u32 {
    let (year, month) = (date.year(), date.month());
    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .unwrap();
    first_of_next.pred_opt().unwrap().day()
}

/// Days left in `date`'s month, not counting `date` itself
///
/// Zero on the last day of the month.
pub fn days_remaining_in_month(date: NaiveDate) -> i64 {
    days_in_month(date) as i64 - date.day() as i64
}
