//! TrakIt Core Library
//!
//! Shared functionality for the TrakIt personal finance tracker:
//! - Domain models (transactions, goals, subscriptions, notifications)
//! - Financial aggregation engine (totals, breakdowns, trends, budget and
//!   goal metrics)
//! - Pluggable advisor backends (Gemini, mock) for categorization and advice
//! - Prompt context assembler for grounded budget advice
//! - JSON snapshot store for application state

pub mod ai;
pub mod context;
pub mod error;
pub mod insights;
pub mod models;
pub mod prompts;
pub mod state;
pub mod store;

pub use ai::{AdvisorBackend, AdvisorClient, GeminiBackend, MockBackend};
pub use context::AdvisorContext;
pub use error::{Error, Result};
pub use insights::{BudgetPolicy, FinancialSummary, TrendPoint, WeekendSplit};
pub use state::AppState;
pub use store::Store;
