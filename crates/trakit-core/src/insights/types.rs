//! Derived-metric types produced by the aggregation engine

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Category;

/// Totals and per-category breakdown derived from the transaction log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialSummary {
    pub total_income: i64,
    pub total_expense: i64,
    /// `total_income - total_expense`; may be negative, never clamped
    pub balance: i64,
    /// Expense totals per category; zero-total categories are omitted.
    /// Income transactions never contribute here, so the Income category is
    /// absent by construction.
    pub category_breakdown: BTreeMap<Category, i64>,
}

/// Budget heuristics for users who have not set an explicit budget
///
/// The fallback stands in for an unset user-defined monthly budget. It is a
/// policy knob, not a constant: callers construct their own policy when the
/// default baseline is wrong for their currency scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPolicy {
    /// Monthly budget assumed when the log shows no income
    pub fallback_budget: i64,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            fallback_budget: 20_000,
        }
    }
}

/// One bucket in a daily spending trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total_expense: i64,
}

/// Expense totals split by day-of-week class
///
/// Raw totals only - deliberately not normalized by the number of weekday vs
/// weekend occurrences in range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendSplit {
    /// Mon-Fri expense total
    pub weekday_total: i64,
    /// Sat/Sun expense total
    pub weekend_total: i64,
}
