//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// TrakIt - Track spending, hit goals, ask the AI
#[derive(Parser)]
#[command(name = "trakit")]
#[command(about = "Personal finance tracker with an AI budget assistant", long_about = None)]
#[command(version)]
pub struct Cli {
    /// State file path (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the state file with starter data
    Init,

    /// Record a transaction
    Add {
        /// Amount in whole currency units
        amount: i64,

        /// What the money was for
        description: String,

        /// Category: food, travel, shopping, bills, essentials,
        /// entertainment, health, income, other
        #[arg(short, long)]
        category: Option<String>,

        /// Record as income instead of expense
        #[arg(long)]
        income: bool,

        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Ask the AI advisor to pick the category
        #[arg(long)]
        auto: bool,
    },

    /// Replace a recorded transaction by id
    Edit {
        /// Id of the transaction to replace
        id: i64,

        /// New amount in whole currency units
        amount: i64,

        /// New description
        description: String,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// Record as income instead of expense
        #[arg(long)]
        income: bool,

        /// New date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recent transactions
    List {
        /// Maximum number of transactions to show
        #[arg(short, long, default_value_t = 10)]
        limit: usize,
    },

    /// Show the financial overview
    Dashboard,

    /// Category breakdown and spending patterns
    Analytics,

    /// Savings goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Subscriptions and upcoming charges
    Subs,

    /// List or dismiss notifications
    Notifications {
        /// Dismiss the notification with this id
        #[arg(long)]
        dismiss: Option<i64>,
    },

    /// Ask the AI assistant a budget question
    Chat {
        /// Your message
        message: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Create a new goal
    Add {
        /// Goal name
        name: String,

        /// Target amount in whole currency units
        target: i64,

        /// Deadline (YYYY-MM-DD)
        deadline: String,

        /// Display icon
        #[arg(long, default_value = "🎯")]
        icon: String,

        /// Display color
        #[arg(long, default_value = "indigo")]
        color: String,
    },

    /// Record a contribution toward a goal
    Save {
        /// Goal id
        id: i64,

        /// Contribution amount in whole currency units
        amount: i64,
    },
}
