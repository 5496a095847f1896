//! Category breakdown and spending-pattern views

use anyhow::Result;
use chrono::NaiveDate;

use trakit_core::insights::{summarize, weekday_weekend_split};
use trakit_core::store::Store;

use super::{bar, fmt_amount, load_state};

pub fn cmd_analytics(store: &Store, today: NaiveDate) -> Result<()> {
    let state = load_state(store, today)?;
    let summary = summarize(&state.transactions);

    println!();
    println!("📊 Analytics");
    println!("   ─────────────────────────────────────────────");

    if summary.total_expense == 0 {
        println!("   No expenses recorded yet.");
        return Ok(());
    }

    println!("   Top categories");
    let mut categories: Vec<(_, i64)> = summary
        .category_breakdown
        .iter()
        .map(|(category, total)| (*category, *total))
        .collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    let max = categories.first().map(|(_, total)| *total).unwrap_or(0);
    for (category, total) in &categories {
        let share = *total as f64 / summary.total_expense as f64 * 100.0;
        println!(
            "   {:<13} {:>8}  {:>5.1}%  {}",
            category.as_str(),
            fmt_amount(*total),
            share,
            bar(*total, max, 20)
        );
    }

    let split = weekday_weekend_split(&state.transactions);
    println!();
    println!("   🕒 Spending patterns");
    println!("   Weekday (Mon-Fri): {}", fmt_amount(split.weekday_total));
    println!("   Weekend (Sat-Sun): {}", fmt_amount(split.weekend_total));
    if split.weekend_total > split.weekday_total {
        println!("   You tend to spend more on weekends. 🎉");
    } else {
        println!("   Your spending is concentrated on weekdays. 💼");
    }
    Ok(())
}
