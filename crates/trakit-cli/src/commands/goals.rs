//! Goal listing, creation, and contributions

use anyhow::Result;
use chrono::NaiveDate;

use trakit_core::insights::goal_pace;
use trakit_core::models::NewGoal;
use trakit_core::store::Store;

use super::{fmt_amount, load_state, parse_date};

pub fn cmd_goals_list(store: &Store, today: NaiveDate) -> Result<()> {
    let state = load_state(store, today)?;

    println!();
    println!("🎯 Savings goals");
    if state.goals.is_empty() {
        println!("   (none yet - create one with `trakit goals add`)");
        return Ok(());
    }

    for goal in &state.goals {
        let progress = goal.progress();
        println!();
        println!("   #{} {} {}", goal.id, goal.icon, goal.name);
        println!(
            "      {} / {} ({:.0}% saved), target date {}",
            fmt_amount(goal.current_amount),
            fmt_amount(goal.target_amount),
            progress,
            goal.deadline
        );
        if progress < 100.0 {
            let pace = goal_pace(goal, today);
            if goal.deadline < today {
                println!("      ⏰ Deadline has passed");
            } else if pace > 0 {
                println!(
                    "      💡 Save {}/day to reach this goal by {}",
                    fmt_amount(pace),
                    goal.deadline.format("%b %-d")
                );
            }
        } else {
            println!("      ✅ Goal reached!");
        }
    }
    Ok(())
}

pub fn cmd_goals_add(
    store: &Store,
    today: NaiveDate,
    name: &str,
    target: i64,
    deadline: &str,
    icon: &str,
    color: &str,
) -> Result<()> {
    let mut state = load_state(store, today)?;
    let deadline = parse_date(Some(deadline), today)?;

    let goal = state.add_goal(NewGoal::new(name, target, 0, deadline, icon, color)?);
    let id = goal.id;
    store.save(&state)?;

    println!("🎯 Created goal #{}: {} ({} by {})", id, name, fmt_amount(target), deadline);
    Ok(())
}

pub fn cmd_goals_save(store: &Store, today: NaiveDate, id: i64, amount: i64) -> Result<()> {
    let mut state = load_state(store, today)?;

    let goal = state.contribute_to_goal(id, amount)?;
    let (name, current, target) = (goal.name.clone(), goal.current_amount, goal.target_amount);
    store.save(&state)?;

    println!(
        "💪 Added {} to {}: now {} / {}",
        fmt_amount(amount),
        name,
        fmt_amount(current),
        fmt_amount(target)
    );
    Ok(())
}
