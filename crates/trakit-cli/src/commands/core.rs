//! Init command and shared utilities

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use trakit_core::state::AppState;
use trakit_core::store::Store;

/// Resolve the store from the optional --data flag
pub fn open_store(data: Option<&Path>) -> Store {
    match data {
        Some(path) => Store::new(path),
        None => Store::new(Store::default_path()),
    }
}

/// Load state, seeding starter data on first run
pub fn load_state(store: &Store, today: NaiveDate) -> Result<AppState> {
    store
        .load_or_seed(today)
        .with_context(|| format!("Failed to load state from {}", store.path().display()))
}

/// Parse a YYYY-MM-DD date argument, defaulting to `today`
pub fn parse_date(arg: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match arg {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw)),
        None => Ok(today),
    }
}

pub fn cmd_init(store: &Store, today: NaiveDate) -> Result<()> {
    if store.exists() {
        println!("State file already exists at {}", store.path().display());
        return Ok(());
    }

    let state = load_state(store, today)?;
    println!();
    println!("✨ TrakIt initialized at {}", store.path().display());
    println!(
        "   Seeded {} transactions, {} goals, {} subscriptions",
        state.transactions.len(),
        state.goals.len(),
        state.subscriptions.len()
    );
    println!("   Run `trakit dashboard` to see your overview.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date() {
        let today = date(2023, 10, 10);
        assert_eq!(parse_date(None, today).unwrap(), today);
        assert_eq!(
            parse_date(Some("2023-10-05"), today).unwrap(),
            date(2023, 10, 5)
        );
        assert!(parse_date(Some("10/05/2023"), today).is_err());
    }

    #[test]
    fn test_cmd_init_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("state.json"));
        let today = date(2023, 10, 10);

        cmd_init(&store, today).unwrap();
        assert!(store.exists());

        // second init is a no-op, not a reseed
        let before = store.load().unwrap().transactions.len();
        cmd_init(&store, today).unwrap();
        assert_eq!(store.load().unwrap().transactions.len(), before);
    }
}
