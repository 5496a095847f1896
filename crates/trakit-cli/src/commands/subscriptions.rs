//! Subscription listing

use anyhow::Result;
use chrono::{Datelike, NaiveDate};

use trakit_core::insights::days_in_month;
use trakit_core::store::Store;

use super::{fmt_amount, load_state};

/// Days until the next charge for a day-of-month due date
///
/// Due days beyond the length of a month land on that month's last day,
/// matching how billers handle the 29th-31st.
fn days_until_due(due_day: u32, today: NaiveDate) -> i64 {
    let this_month_len = days_in_month(today);
    let effective = due_day.min(this_month_len);
    if effective >= today.day() {
        (effective - today.day()) as i64
    } else {
        (this_month_len - today.day() + due_day.min(days_in_month_next(today))) as i64
    }
}

fn days_in_month_next(today: NaiveDate) -> u32 {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    days_in_month(NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}

pub fn cmd_subs(store: &Store, today: NaiveDate) -> Result<()> {
    let state = load_state(store, today)?;

    println!();
    println!("🔁 Subscriptions");
    if state.subscriptions.is_empty() {
        println!("   (none tracked)");
        return Ok(());
    }

    let mut subs: Vec<_> = state.subscriptions.iter().collect();
    subs.sort_by_key(|sub| days_until_due(sub.due_day, today));

    for sub in &subs {
        let due_in = days_until_due(sub.due_day, today);
        let when = match due_in {
            0 => "due today".to_string(),
            1 => "due tomorrow".to_string(),
            n => format!("due in {} days", n),
        };
        println!(
            "   [{}] {:<12} {:>8}  {} (the {} of each month)",
            sub.logo,
            sub.name,
            fmt_amount(sub.amount),
            when,
            sub.due_day
        );
    }

    let monthly_total: i64 = state.subscriptions.iter().map(|sub| sub.amount).sum();
    println!("   ─────────────────────────────────────────────");
    println!("   Monthly total: {}", fmt_amount(monthly_total));
    Ok(())
}
