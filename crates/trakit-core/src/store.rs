//! JSON snapshot store for application state
//!
//! One file, one snapshot. Load at process start, save after mutation -
//! the process-boundary hooks the state container is designed around.
//! Writes go through a temp file in the same directory and a rename, so a
//! crash mid-save never leaves a torn state file.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Error, Result};
use crate::state::AppState;

const STATE_FILE: &str = "state.json";

/// File-backed store for [`AppState`]
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default state-file location under the platform data directory
    /// (e.g. `~/.local/share/trakit/state.json`), falling back to the
    /// current directory when no data dir is available.
    pub fn default_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("trakit").join(STATE_FILE))
            .unwrap_or_else(|| PathBuf::from(STATE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the persisted state
    pub fn load(&self) -> Result<AppState> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            Error::Store(format!("Cannot read {}: {}", self.path.display(), e))
        })?;
        let state = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), "Loaded state");
        Ok(state)
    }

    /// Load the persisted state, seeding a fresh starter state on first run
    pub fn load_or_seed(&self, today: NaiveDate) -> Result<AppState> {
        if self.exists() {
            self.load()
        } else {
            let state = AppState::seeded(today);
            self.save(&state)?;
            Ok(state)
        }
    }

    /// Persist the state atomically
    pub fn save(&self, state: &AppState) -> Result<()> {
        let parent = self.path.parent().unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(parent)?;

        let json = serde_json::to_string_pretty(state)?;
        let tmp = tempfile::NamedTempFile::new_in(parent)?;
        fs::write(tmp.path(), json)?;
        tmp.persist(&self.path)
            .map_err(|e| Error::Store(format!("Cannot persist {}: {}", self.path.display(), e)))?;

        debug!(path = %self.path.display(), "Saved state");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, NewTransaction, TxKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("state.json"));

        let mut state = AppState::new();
        state
            .add_transaction(
                NewTransaction::new(
                    350,
                    "Coffee",
                    Category::Food,
                    date(2023, 10, 5),
                    TxKind::Expense,
                )
                .unwrap(),
            );
        store.save(&state).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.transactions.len(), 1);
        assert_eq!(loaded.transactions[0].description, "Coffee");
    }

    #[test]
    fn test_load_missing_file_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("missing.json"));
        assert!(matches!(store.load(), Err(Error::Store(_))));
    }

    #[test]
    fn test_load_or_seed_creates_starter_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("state.json"));
        assert!(!store.exists());

        let state = store.load_or_seed(date(2023, 10, 10)).unwrap();
        assert!(!state.transactions.is_empty());
        assert!(store.exists());

        // second load reads the file back rather than reseeding
        let again = store.load_or_seed(date(2023, 11, 1)).unwrap();
        assert_eq!(again.transactions.len(), state.transactions.len());
        assert_eq!(again.transactions[0].date, state.transactions[0].date);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("nested").join("deeper").join("state.json"));
        store.save(&AppState::new()).unwrap();
        assert!(store.exists());
    }
}
