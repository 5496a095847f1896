//! Domain models for TrakIt
//!
//! All monetary amounts are whole currency units stored as `i64`. Integer
//! units keep the aggregation identities exact (`balance` is always
//! `income - expense` with no rounding drift) and must be used consistently
//! across the whole system.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Spending categories - a closed set shared by the engine and the advisor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Bills,
    Essentials,
    Entertainment,
    Health,
    Income,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Essentials => "Essentials",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Income => "Income",
            Self::Other => "Other",
        }
    }

    /// All categories, in display order
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Travel,
            Self::Shopping,
            Self::Bills,
            Self::Essentials,
            Self::Entertainment,
            Self::Health,
            Self::Income,
            Self::Other,
        ]
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "travel" => Ok(Self::Travel),
            "shopping" => Ok(Self::Shopping),
            "bills" => Ok(Self::Bills),
            "essentials" => Ok(Self::Essentials),
            "entertainment" => Ok(Self::Entertainment),
            "health" => Ok(Self::Health),
            "income" => Ok(Self::Income),
            "other" => Ok(Self::Other),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Transaction kind - whether money came in or went out
///
/// Kept independent of `Category::Income` on purpose: the convention is that
/// income transactions carry the Income category, but the data shape does not
/// enforce it. The aggregation engine keys off `kind` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TxKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded income/expense transaction
///
/// Immutable once created; edits replace the whole record by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    /// Whole currency units, always non-negative; `kind` carries the sign
    pub amount: i64,
    pub description: String,
    pub category: Category,
    /// Calendar date the transaction is attributed to (no time component)
    pub date: NaiveDate,
    pub kind: TxKind,
}

/// A new transaction before it is assigned an id and added to the log
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: i64,
    pub description: String,
    pub category: Category,
    pub date: NaiveDate,
    pub kind: TxKind,
}

impl NewTransaction {
    /// Create a validated new transaction
    ///
    /// Rejects negative amounts and empty descriptions here, at the
    /// boundary, so the aggregation engine can assume well-formed input.
    pub fn new(
        amount: i64,
        description: &str,
        category: Category,
        date: NaiveDate,
        kind: TxKind,
    ) -> Result<Self> {
        if amount < 0 {
            return Err(Error::InvalidData(format!(
                "Transaction amount must be non-negative, got {}",
                amount
            )));
        }
        if description.trim().is_empty() {
            return Err(Error::InvalidData(
                "Transaction description must not be empty".into(),
            ));
        }
        Ok(Self {
            amount,
            description: description.trim().to_string(),
            category,
            date,
            kind,
        })
    }
}

/// A savings goal with a target amount and deadline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    /// Always positive
    pub target_amount: i64,
    /// Non-negative; only grows in normal use
    pub current_amount: i64,
    pub deadline: NaiveDate,
    /// Display metadata only
    pub icon: String,
    /// Display metadata only
    pub color: String,
}

impl Goal {
    /// Progress toward the target as a percentage (uncapped; derived, never stored)
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0 {
            return 0.0;
        }
        self.current_amount as f64 / self.target_amount as f64 * 100.0
    }
}

/// A new goal before it is assigned an id
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub target_amount: i64,
    pub current_amount: i64,
    pub deadline: NaiveDate,
    pub icon: String,
    pub color: String,
}

impl NewGoal {
    pub fn new(
        name: &str,
        target_amount: i64,
        current_amount: i64,
        deadline: NaiveDate,
        icon: &str,
        color: &str,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::InvalidData("Goal name must not be empty".into()));
        }
        if target_amount <= 0 {
            return Err(Error::InvalidData(format!(
                "Goal target must be positive, got {}",
                target_amount
            )));
        }
        if current_amount < 0 {
            return Err(Error::InvalidData(format!(
                "Goal current amount must be non-negative, got {}",
                current_amount
            )));
        }
        Ok(Self {
            name: name.trim().to_string(),
            target_amount,
            current_amount,
            deadline,
            icon: icon.to_string(),
            color: color.to_string(),
        })
    }
}

/// A recurring subscription charge
///
/// Read-only in the current scope: subscriptions are tracked for display,
/// no charge is ever posted to the transaction log from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: i64,
    pub name: String,
    pub amount: i64,
    /// Day of month the charge lands on (1-31)
    pub due_day: u32,
    /// Display metadata only
    pub logo: String,
}

impl Subscription {
    pub fn new(id: i64, name: &str, amount: i64, due_day: u32, logo: &str) -> Result<Self> {
        if !(1..=31).contains(&due_day) {
            return Err(Error::InvalidData(format!(
                "Subscription due day must be 1-31, got {}",
                due_day
            )));
        }
        if amount < 0 {
            return Err(Error::InvalidData(format!(
                "Subscription amount must be non-negative, got {}",
                amount
            )));
        }
        Ok(Self {
            id,
            name: name.to_string(),
            amount,
            due_day,
            logo: logo.to_string(),
        })
    }
}

/// Notification kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Alert,
    Tip,
    Success,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alert => "alert",
            Self::Tip => "tip",
            Self::Success => "success",
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alert" => Ok(Self::Alert),
            "tip" => Ok(Self::Tip),
            "success" => Ok(Self::Success),
            _ => Err(format!("Unknown notification kind: {}", s)),
        }
    }
}

/// An ephemeral advisory shown to the user
///
/// Created by the surrounding system, removed by explicit dismissal. The
/// aggregation engine never reads these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    /// Display string, e.g. "Just now" or "2 hours ago"
    pub date: String,
    pub read: bool,
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One message in the advisor chat history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: i64,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}
