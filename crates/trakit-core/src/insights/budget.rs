//! Budget derivation: estimated budget, progress, safe-to-spend, health score

use chrono::NaiveDate;

use super::days_remaining_in_month;
use super::types::{BudgetPolicy, FinancialSummary};

/// Estimate the monthly budget from recorded income
///
/// Recorded income is treated as the budget; with no income on the log yet,
/// the policy's fallback baseline is used instead.
pub fn estimated_budget(summary: &FinancialSummary, policy: &BudgetPolicy) -> i64 {
    if summary.total_income > 0 {
        summary.total_income
    } else {
        policy.fallback_budget
    }
}

/// Share of the budget already spent, as a percentage clamped to [0, 100]
///
/// The clamp is for display only; use [`overspend`] when the caller needs
/// "over by how much".
pub fn budget_progress(summary: &FinancialSummary, budget: i64) -> f64 {
    if budget <= 0 {
        return 0.0;
    }
    (summary.total_expense as f64 / budget as f64 * 100.0).min(100.0)
}

/// Amount spent beyond the budget, unclamped
///
/// Negative while under budget.
pub fn overspend(summary: &FinancialSummary, budget: i64) -> i64 {
    summary.total_expense - budget
}

/// Maximum daily expense that keeps projected month-end spend within budget
///
/// Splits the remaining budget evenly over the days left in `as_of`'s month
/// (not counting `as_of` itself), rounding down. On the last day of the month
/// there are no days left to spread over, and the result is defined as 0.
pub fn safe_daily_spend(summary: &FinancialSummary, budget: i64, as_of: NaiveDate) -> i64 {
    let days_remaining = days_remaining_in_month(as_of);
    if days_remaining <= 0 {
        return 0;
    }
    let remaining_budget = (budget - summary.total_expense).max(0);
    remaining_budget / days_remaining
}

/// Heuristic financial health score in [0, 100]
///
/// Rule-based, not statistical. Starts from a base of 80:
/// - progress over 90% costs 30 points, over 75% costs 10
/// - more than 20% of the budget still unspent earns 10 points
///
/// Both adjustments are judged against the same inputs independently, then
/// the result is clamped.
pub fn health_score(budget_progress: f64, remaining_budget: i64, budget: i64) -> i64 {
    let mut score: i64 = 80;
    if budget_progress > 90.0 {
        score -= 30;
    } else if budget_progress > 75.0 {
        score -= 10;
    }
    if remaining_budget as f64 > budget as f64 * 0.20 {
        score += 10;
    }
    score.clamp(0, 100)
}
