//! Mock backend for testing
//!
//! Provides predictable responses for both advisor operations. Useful for
//! unit tests and for driving the CLI without an API key.

use async_trait::async_trait;

use crate::context::AdvisorContext;
use crate::error::Result;
use crate::models::Category;

use super::AdvisorBackend;

/// Mock advisor backend for testing
#[derive(Clone, Default)]
pub struct MockBackend {
    /// Whether health_check should return true
    pub healthy: bool,
}

impl MockBackend {
    /// Create a new mock backend (healthy by default)
    pub fn new() -> Self {
        Self { healthy: true }
    }

    /// Create an unhealthy mock backend
    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl AdvisorBackend for MockBackend {
    async fn categorize(&self, description: &str) -> Result<Category> {
        // Keyword rules mirroring the categorization prompt
        let text = description.to_lowercase();
        let category = if ["zomato", "swiggy", "blinkit", "chai", "lunch", "coffee", "burger"]
            .iter()
            .any(|kw| text.contains(kw))
        {
            Category::Food
        } else if ["uber", "ola", "rapido", "auto", "bus", "metro", "petrol", "fuel"]
            .iter()
            .any(|kw| text.contains(kw))
        {
            Category::Travel
        } else if ["recharge", "jio", "airtel", "wifi", "electricity", "rent"]
            .iter()
            .any(|kw| text.contains(kw))
        {
            Category::Bills
        } else if ["netflix", "spotify", "movie", "concert", "game"]
            .iter()
            .any(|kw| text.contains(kw))
        {
            Category::Entertainment
        } else if ["groceries", "vegetables", "milk", "zepto", "instamart", "medicine"]
            .iter()
            .any(|kw| text.contains(kw))
        {
            Category::Essentials
        } else if ["clothes", "amazon", "flipkart", "myntra", "shoes"]
            .iter()
            .any(|kw| text.contains(kw))
        {
            Category::Shopping
        } else if ["doctor", "pharmacy", "checkup"].iter().any(|kw| text.contains(kw)) {
            Category::Health
        } else if ["salary", "stipend", "payout"].iter().any(|kw| text.contains(kw)) {
            Category::Income
        } else {
            Category::Other
        };

        Ok(category)
    }

    async fn advise(&self, context: &AdvisorContext, message: &str) -> Result<String> {
        let headroom = (context.safe_daily_spend - context.spent_today).max(0);
        Ok(format!(
            "**Summary**\nYou asked: \"{}\". Your balance this month is {}.\n\n\
             **Insights**\n- You have spent {} so far this month, {} of it today.\n\n\
             **Advice**\n- You can safely spend {} more today to stay on track.",
            message, context.balance, context.monthly_expense, context.spent_today, headroom
        ))
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn model(&self) -> &str {
        "mock"
    }

    fn host(&self) -> &str {
        "mock://localhost"
    }
}
