//! Advisor context assembler
//!
//! Given the transaction log and a reference date, snapshots everything the
//! remote advisor needs to give grounded budget advice: current-month totals,
//! today's spend, days remaining, the recommended safe daily spend, and
//! recent transaction lines. The snapshot is plain data; rendering it into a
//! prompt block is the only string work done here.

use chrono::{Datelike, NaiveDate};

use crate::insights::{
    budget_progress, daily_average, days_remaining_in_month, estimated_budget, safe_daily_spend,
    spent_on, summarize, BudgetPolicy,
};
use crate::models::{Transaction, TxKind};

/// How many recent transaction lines go into the prompt
const RECENT_LINES: usize = 30;

/// Financial snapshot consumed by the advisor
#[derive(Debug, Clone, PartialEq)]
pub struct AdvisorContext {
    pub as_of: NaiveDate,
    /// Income recorded in `as_of`'s calendar month
    pub monthly_income: i64,
    /// Expenses recorded in `as_of`'s calendar month
    pub monthly_expense: i64,
    pub balance: i64,
    pub spent_today: i64,
    pub days_remaining: i64,
    pub daily_average: i64,
    pub safe_daily_spend: i64,
    /// Budget share used so far, percent
    pub budget_progress: f64,
    /// Recent transactions formatted one per line, newest first
    pub recent_lines: Vec<String>,
}

impl AdvisorContext {
    /// Snapshot the metrics the advisor consumes
    ///
    /// Monthly figures cover `as_of`'s calendar month only; the recent lines
    /// draw from the whole log, newest first.
    pub fn assemble(transactions: &[Transaction], as_of: NaiveDate) -> Self {
        Self::assemble_with_policy(transactions, as_of, &BudgetPolicy::default())
    }

    pub fn assemble_with_policy(
        transactions: &[Transaction],
        as_of: NaiveDate,
        policy: &BudgetPolicy,
    ) -> Self {
        let this_month: Vec<Transaction> = transactions
            .iter()
            .filter(|tx| tx.date.year() == as_of.year() && tx.date.month() == as_of.month())
            .cloned()
            .collect();

        let summary = summarize(&this_month);
        let budget = estimated_budget(&summary, policy);

        let mut recent: Vec<&Transaction> = transactions.iter().collect();
        recent.sort_by(|a, b| b.date.cmp(&a.date));
        let recent_lines = recent
            .iter()
            .take(RECENT_LINES)
            .map(|tx| {
                let sign = match tx.kind {
                    TxKind::Income => '+',
                    TxKind::Expense => '-',
                };
                format!(
                    "- {}: {} ({}) | {}{}",
                    tx.date, tx.description, tx.category, sign, tx.amount
                )
            })
            .collect();

        Self {
            as_of,
            monthly_income: summary.total_income,
            monthly_expense: summary.total_expense,
            balance: summary.balance,
            spent_today: spent_on(transactions, as_of),
            days_remaining: days_remaining_in_month(as_of),
            daily_average: daily_average(&summary, as_of),
            safe_daily_spend: safe_daily_spend(&summary, budget, as_of),
            budget_progress: budget_progress(&summary, budget),
            recent_lines,
        }
    }

    /// Render the prompt block the advisor receives alongside a user message
    pub fn render(&self, message: &str) -> String {
        format!(
            "[Live Financial Context - Date: {}]\n\
             - Monthly Income: {}\n\
             - Monthly Expenses: {}\n\
             - Current Balance: {}\n\
             - Today's Spending So Far: {}\n\
             - Days Remaining in Month: {}\n\
             - Average Daily Spend: {}\n\
             - Recommended Safe Daily Spend: {}\n\
             \n\
             [Recent Transactions]\n\
             {}\n\
             \n\
             User Query: \"{}\"",
            self.as_of,
            self.monthly_income,
            self.monthly_expense,
            self.balance,
            self.spent_today,
            self.days_remaining,
            self.daily_average,
            self.safe_daily_spend,
            self.recent_lines.join("\n"),
            message
        )
    }
}
