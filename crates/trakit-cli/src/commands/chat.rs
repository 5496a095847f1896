//! AI assistant round-trips

use anyhow::Result;
use chrono::{NaiveDate, Utc};

use trakit_core::ai::{AdvisorBackend, AdvisorClient};
use trakit_core::context::AdvisorContext;
use trakit_core::models::ChatRole;
use trakit_core::store::Store;

use super::load_state;

/// Shown instead of an error when the advisor call fails
const APOLOGY: &str = "Sorry, I couldn't process your request. Please try again.";

pub async fn cmd_chat(
    store: &Store,
    today: NaiveDate,
    advisor: Option<&AdvisorClient>,
    message: &str,
) -> Result<()> {
    let Some(client) = advisor else {
        println!("❌ No advisor configured.");
        println!("   Set GEMINI_API_KEY, or ADVISOR_BACKEND=mock to try it offline.");
        return Ok(());
    };

    let mut state = load_state(store, today)?;
    let context = AdvisorContext::assemble(&state.transactions, today);

    tracing::debug!(model = client.model(), host = client.host(), "Asking advisor");
    let reply = match client.advise(&context, message).await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(error = %e, "Advisor call failed");
            APOLOGY.to_string()
        }
    };

    let now = Utc::now();
    state.push_chat_message(ChatRole::User, message, now);
    state.push_chat_message(ChatRole::Model, &reply, now);
    store.save(&state)?;

    println!();
    println!("🧑 {}", message);
    println!();
    println!("🤖 {}", reply);
    Ok(())
}
