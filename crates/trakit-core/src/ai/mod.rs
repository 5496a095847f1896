//! Pluggable advisor backend abstraction
//!
//! Backend-agnostic interface for the two AI capabilities the app delegates
//! to a language model: expense categorization and budget advice. The engine
//! never calls these directly; the surrounding app injects a client where it
//! needs one, which keeps everything testable against the mock.
//!
//! # Architecture
//!
//! - `AdvisorBackend` trait: defines the interface for all advisor operations
//! - `AdvisorClient` enum: concrete wrapper providing Clone + compile-time dispatch
//! - Backend implementations: `GeminiBackend`, `MockBackend`
//!
//! # Configuration
//!
//! Environment variables:
//! - `ADVISOR_BACKEND`: Backend to use (gemini, mock). Default: gemini
//! - `GEMINI_API_KEY`: API key (required for gemini backend)
//! - `GEMINI_MODEL`: Model name (default: gemini-2.5-flash)
//! - `GEMINI_HOST`: API base URL (default: https://generativelanguage.googleapis.com)
//!
//! Callers own the failure policy: a failed categorization falls back to
//! `Category::Other`, a failed advice call to a fixed apology line. Nothing
//! in this module is load-bearing for the aggregation engine.

mod gemini;
mod mock;
pub mod parsing;

pub use gemini::GeminiBackend;
pub use mock::MockBackend;

use async_trait::async_trait;

use crate::context::AdvisorContext;
use crate::error::Result;
use crate::models::Category;

/// Trait defining the interface for all advisor backends
#[async_trait]
pub trait AdvisorBackend: Send + Sync {
    /// Classify a free-text expense description into a category
    async fn categorize(&self, description: &str) -> Result<Category>;

    /// Answer a budget question grounded in the financial snapshot
    async fn advise(&self, context: &AdvisorContext, message: &str) -> Result<String>;

    /// Check if the backend is available
    async fn health_check(&self) -> bool;

    /// Get the model name (for logging)
    fn model(&self) -> &str;

    /// Get the host URL (for logging)
    fn host(&self) -> &str;
}

/// Concrete advisor client enum
///
/// Provides Clone and compile-time dispatch without Box<dyn> overhead.
#[derive(Clone)]
pub enum AdvisorClient {
    /// Gemini backend (HTTP API)
    Gemini(GeminiBackend),
    /// Mock backend for testing
    Mock(MockBackend),
}

impl AdvisorClient {
    /// Create an advisor client from environment variables
    ///
    /// Checks `ADVISOR_BACKEND` to determine which backend to use:
    /// - `gemini` (default): Uses GEMINI_API_KEY, GEMINI_MODEL, GEMINI_HOST
    /// - `mock`: Creates a mock backend for testing
    ///
    /// Returns None if the required environment variables are not set.
    pub fn from_env() -> Option<Self> {
        let backend = std::env::var("ADVISOR_BACKEND").unwrap_or_else(|_| "gemini".to_string());

        match backend.to_lowercase().as_str() {
            "gemini" => GeminiBackend::from_env().map(AdvisorClient::Gemini),
            "mock" => Some(AdvisorClient::Mock(MockBackend::new())),
            _ => {
                tracing::warn!(backend = %backend, "Unknown ADVISOR_BACKEND, falling back to gemini");
                GeminiBackend::from_env().map(AdvisorClient::Gemini)
            }
        }
    }

    /// Create a Gemini backend directly
    pub fn gemini(api_key: &str, model: &str) -> Self {
        AdvisorClient::Gemini(GeminiBackend::new(api_key, model))
    }

    /// Create a mock backend for testing
    pub fn mock() -> Self {
        AdvisorClient::Mock(MockBackend::new())
    }
}

// Implement AdvisorBackend for AdvisorClient by delegating to the inner backend
#[async_trait]
impl AdvisorBackend for AdvisorClient {
    async fn categorize(&self, description: &str) -> Result<Category> {
        match self {
            AdvisorClient::Gemini(b) => b.categorize(description).await,
            AdvisorClient::Mock(b) => b.categorize(description).await,
        }
    }

    async fn advise(&self, context: &AdvisorContext, message: &str) -> Result<String> {
        match self {
            AdvisorClient::Gemini(b) => b.advise(context, message).await,
            AdvisorClient::Mock(b) => b.advise(context, message).await,
        }
    }

    async fn health_check(&self) -> bool {
        match self {
            AdvisorClient::Gemini(b) => b.health_check().await,
            AdvisorClient::Mock(b) => b.health_check().await,
        }
    }

    fn model(&self) -> &str {
        match self {
            AdvisorClient::Gemini(b) => b.model(),
            AdvisorClient::Mock(b) => b.model(),
        }
    }

    fn host(&self) -> &str {
        match self {
            AdvisorClient::Gemini(b) => b.host(),
            AdvisorClient::Mock(b) => b.host(),
        }
    }
}
