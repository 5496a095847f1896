//! Transaction commands (add, edit, list)

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use trakit_core::ai::{AdvisorBackend, AdvisorClient};
use trakit_core::models::{Category, NewTransaction, TxKind};
use trakit_core::store::Store;

use super::{fmt_amount, load_state, parse_date};

/// Resolve the category for a new transaction
///
/// Explicit flag wins; income defaults to the Income category; `--auto` asks
/// the advisor and falls back to Other when the call fails or no backend is
/// configured.
async fn resolve_category(
    explicit: Option<&str>,
    kind: TxKind,
    auto: bool,
    description: &str,
    advisor: Option<&AdvisorClient>,
) -> Result<Category> {
    if let Some(raw) = explicit {
        return Category::from_str(raw).map_err(|e| anyhow!(e));
    }
    if kind == TxKind::Income {
        return Ok(Category::Income);
    }
    if auto {
        match advisor {
            Some(client) => match client.categorize(description).await {
                Ok(category) => {
                    tracing::debug!(category = %category, "Advisor categorized transaction");
                    return Ok(category);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Categorization failed, falling back to Other");
                    return Ok(Category::Other);
                }
            },
            None => {
                tracing::warn!("No advisor configured, falling back to Other");
                return Ok(Category::Other);
            }
        }
    }
    Ok(Category::Other)
}

pub async fn cmd_add(
    store: &Store,
    today: NaiveDate,
    amount: i64,
    description: &str,
    category: Option<&str>,
    income: bool,
    date: Option<&str>,
    auto: bool,
    advisor: Option<&AdvisorClient>,
) -> Result<()> {
    let mut state = load_state(store, today)?;
    let kind = if income { TxKind::Income } else { TxKind::Expense };
    let resolved = resolve_category(category, kind, auto, description, advisor).await?;
    let date = parse_date(date, today)?;

    let new = NewTransaction::new(amount, description, resolved, date, kind)?;
    let tx = state.add_transaction(new);
    let (id, category) = (tx.id, tx.category);
    store.save(&state)?;

    let sign = if income { "+" } else { "-" };
    println!(
        "✅ Recorded #{}: {} ({}) {}{}",
        id,
        description,
        category,
        sign,
        fmt_amount(amount)
    );
    Ok(())
}

pub fn cmd_edit(
    store: &Store,
    today: NaiveDate,
    id: i64,
    amount: i64,
    description: &str,
    category: Option<&str>,
    income: bool,
    date: Option<&str>,
) -> Result<()> {
    let mut state = load_state(store, today)?;
    let existing = state
        .transaction(id)
        .ok_or_else(|| anyhow!("Transaction {} not found", id))?;

    let kind = if income { TxKind::Income } else { TxKind::Expense };
    // absent flags keep the old category rather than resetting it
    let resolved = match category {
        Some(raw) => Category::from_str(raw).map_err(|e| anyhow!(e))?,
        None if income => Category::Income,
        None => existing.category,
    };
    let date = parse_date(date, today)?;

    let new = NewTransaction::new(amount, description, resolved, date, kind)?;
    state.replace_transaction(id, new)?;
    store.save(&state)?;

    println!("✏️  Replaced #{}: {} {}", id, description, fmt_amount(amount));
    Ok(())
}

pub fn cmd_list(store: &Store, today: NaiveDate, limit: usize) -> Result<()> {
    let state = load_state(store, today)?;

    println!();
    println!("🧾 Recent transactions");
    if state.transactions.is_empty() {
        println!("   (none yet - record one with `trakit add`)");
        return Ok(());
    }

    for tx in state.transactions.iter().take(limit) {
        let sign = match tx.kind {
            TxKind::Income => '+',
            TxKind::Expense => '-',
        };
        println!(
            "   #{:<4} {}  {:<24} {:<13} {}{}",
            tx.id,
            tx.date,
            tx.description,
            tx.category,
            sign,
            fmt_amount(tx.amount)
        );
    }
    if state.transactions.len() > limit {
        println!("   ... {} more", state.transactions.len() - limit);
    }
    Ok(())
}
