//! Financial overview command

use anyhow::Result;
use chrono::NaiveDate;

use trakit_core::insights::{
    budget_progress, daily_trend, estimated_budget, health_score, safe_daily_spend, spent_on,
    summarize, BudgetPolicy, TrendPoint,
};
use trakit_core::store::Store;

use super::{bar, fmt_amount, load_state};

pub fn cmd_dashboard(store: &Store, today: NaiveDate) -> Result<()> {
    let state = load_state(store, today)?;

    let summary = summarize(&state.transactions);
    let policy = BudgetPolicy::default();
    let budget = estimated_budget(&summary, &policy);
    let progress = budget_progress(&summary, budget);
    let remaining = (budget - summary.total_expense).max(0);
    let safe = safe_daily_spend(&summary, budget, today);
    let spent_today = spent_on(&state.transactions, today);
    let score = health_score(progress, remaining, budget);

    println!();
    println!("💰 TrakIt Dashboard - {}", today);
    println!("   ─────────────────────────────────────────────");
    println!("   Balance:        {}", fmt_amount(summary.balance));
    println!("   Income:        +{}", fmt_amount(summary.total_income));
    println!("   Expenses:      -{}", fmt_amount(summary.total_expense));
    println!();
    println!(
        "   Monthly budget: {} ({:.0}% used, {} remaining)",
        fmt_amount(budget),
        progress,
        fmt_amount(remaining)
    );
    if progress >= 100.0 {
        println!("   ⚠️  Over limit");
    }
    println!(
        "   ⚡ Safe to spend today: {} (spent so far: {})",
        fmt_amount(safe),
        fmt_amount(spent_today)
    );
    println!("   ❤️  FinScore: {}/100", score);

    println!();
    println!("   📈 Last 7 days");
    let points: Vec<TrendPoint> = daily_trend(&state.transactions, today, 7).collect();
    let max = points.iter().map(|p| p.total_expense).max().unwrap_or(0);
    for point in &points {
        println!(
            "   {} ({}) {:>8}  {}",
            point.date,
            point.date.format("%a"),
            fmt_amount(point.total_expense),
            bar(point.total_expense, max, 24)
        );
    }

    if !state.subscriptions.is_empty() {
        println!();
        println!("   🔁 Subscriptions");
        for sub in &state.subscriptions {
            println!(
                "   {:<12} {:>8}  (due on the {})",
                sub.name,
                fmt_amount(sub.amount),
                sub.due_day
            );
        }
    }
    Ok(())
}
