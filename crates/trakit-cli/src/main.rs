//! TrakIt CLI - Personal finance tracker with an AI budget assistant
//!
//! Usage:
//!   trakit init                   Initialize the state file with starter data
//!   trakit add 350 "Coffee"       Record an expense
//!   trakit dashboard              Show the financial overview
//!   trakit chat "How am I doing?" Ask the AI assistant

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use trakit_core::ai::AdvisorClient;

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let store = commands::open_store(cli.data.as_deref());
    let today = chrono::Local::now().date_naive();

    match cli.command {
        Commands::Init => commands::cmd_init(&store, today),
        Commands::Add {
            amount,
            description,
            category,
            income,
            date,
            auto,
        } => {
            let advisor = if auto { AdvisorClient::from_env() } else { None };
            commands::cmd_add(
                &store,
                today,
                amount,
                &description,
                category.as_deref(),
                income,
                date.as_deref(),
                auto,
                advisor.as_ref(),
            )
            .await
        }
        Commands::Edit {
            id,
            amount,
            description,
            category,
            income,
            date,
        } => {
            commands::cmd_edit(
                &store,
                today,
                id,
                amount,
                &description,
                category.as_deref(),
                income,
                date.as_deref(),
            )
        }
        Commands::List { limit } => commands::cmd_list(&store, today, limit),
        Commands::Dashboard => commands::cmd_dashboard(&store, today),
        Commands::Analytics => commands::cmd_analytics(&store, today),
        Commands::Goals { action } => match action {
            None => commands::cmd_goals_list(&store, today),
            Some(GoalsAction::Add {
                name,
                target,
                deadline,
                icon,
                color,
            }) => commands::cmd_goals_add(&store, today, &name, target, &deadline, &icon, &color),
            Some(GoalsAction::Save { id, amount }) => {
                commands::cmd_goals_save(&store, today, id, amount)
            }
        },
        Commands::Subs => commands::cmd_subs(&store, today),
        Commands::Notifications { dismiss } => commands::cmd_notifications(&store, today, dismiss),
        Commands::Chat { message } => {
            let advisor = AdvisorClient::from_env();
            commands::cmd_chat(&store, today, advisor.as_ref(), &message.join(" ")).await
        }
    }
}
