//! Application state container
//!
//! One explicit, passed-in object instead of ambient storage. All mutation
//! goes through methods here; the aggregation engine only ever sees plain
//! slices borrowed from this state.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{
    ChatMessage, ChatRole, Goal, NewGoal, NewTransaction, Notification, NotificationKind,
    Subscription, Transaction,
};

/// Full application state, persisted as one JSON snapshot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    /// Transaction log, newest first
    pub transactions: Vec<Transaction>,
    pub goals: Vec<Goal>,
    pub subscriptions: Vec<Subscription>,
    pub notifications: Vec<Notification>,
    pub chat_history: Vec<ChatMessage>,
    /// Next id handed out to any record
    next_id: i64,
}

impl AppState {
    /// Create an empty state
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Starter state shown on first run, dated relative to `today`
    pub fn seeded(today: NaiveDate) -> Self {
        let mut state = Self::new();
        let first_of_month = NaiveDate::from_ymd_opt(today.year(), today.month(), 1).unwrap();

        let seed_transactions = [
            (50000, "Salary Credit", "income", first_of_month),
            (350, "Starbucks Coffee", "food", today - Duration::days(4)),
            (800, "Uber Trip", "travel", today - Duration::days(3)),
            (1200, "Grocery Run", "essentials", today - Duration::days(2)),
            (499, "Netflix Subscription", "entertainment", today - Duration::days(1)),
        ];
        // Seed data is static and well-formed; add in reverse so the salary
        // entry ends up oldest in the newest-first log.
        for (amount, description, category, date) in seed_transactions.iter().rev() {
            let kind = if *category == "income" {
                crate::models::TxKind::Income
            } else {
                crate::models::TxKind::Expense
            };
            let new = NewTransaction::new(
                *amount,
                description,
                category.parse().unwrap(),
                *date,
                kind,
            )
            .unwrap();
            state.add_transaction(new);
        }

        let seed_goals = [
            ("New iPhone 15", 80000, 24000, 240, "📱", "indigo"),
            ("Goa Trip", 25000, 5000, 160, "🌴", "pink"),
            ("Emergency Fund", 100000, 65000, 440, "🛡️", "emerald"),
        ];
        for (name, target, current, days_out, icon, color) in seed_goals {
            let goal = NewGoal::new(
                name,
                target,
                current,
                today + Duration::days(days_out),
                icon,
                color,
            )
            .unwrap();
            state.add_goal(goal);
        }

        for (name, amount, due_day, logo) in
            [("Netflix", 199, 15, "N"), ("Spotify", 119, 22, "S"), ("Jio Fiber", 999, 5, "J")]
        {
            let id = state.next_id();
            state
                .subscriptions
                .push(Subscription::new(id, name, amount, due_day, logo).unwrap());
        }

        state.push_notification(
            "Welcome to TrakIt!",
            "Start by adding your first expense.",
            NotificationKind::Tip,
            "Just now",
        );
        state.push_notification(
            "Budget Alert",
            "You have used 80% of your food budget.",
            NotificationKind::Alert,
            "2 hours ago",
        );

        state
    }

    fn next_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add a validated transaction to the head of the log, assigning its id
    pub fn add_transaction(&mut self, new: NewTransaction) -> &Transaction {
        let id = self.next_id();
        self.transactions.insert(
            0,
            Transaction {
                id,
                amount: new.amount,
                description: new.description,
                category: new.category,
                date: new.date,
                kind: new.kind,
            },
        );
        &self.transactions[0]
    }

    /// Replace the transaction with `id` by a new record (edits never mutate
    /// in place)
    pub fn replace_transaction(&mut self, id: i64, new: NewTransaction) -> Result<&Transaction> {
        let slot = self
            .transactions
            .iter_mut()
            .find(|tx| tx.id == id)
            .ok_or_else(|| Error::NotFound(format!("Transaction {}", id)))?;
        *slot = Transaction {
            id,
            amount: new.amount,
            description: new.description,
            category: new.category,
            date: new.date,
            kind: new.kind,
        };
        Ok(slot)
    }

    /// Look up a transaction by id
    pub fn transaction(&self, id: i64) -> Option<&Transaction> {
        self.transactions.iter().find(|tx| tx.id == id)
    }

    /// Add a validated goal, assigning its id
    pub fn add_goal(&mut self, new: NewGoal) -> &Goal {
        let id = self.next_id();
        self.goals.push(Goal {
            id,
            name: new.name,
            target_amount: new.target_amount,
            current_amount: new.current_amount,
            deadline: new.deadline,
            icon: new.icon,
            color: new.color,
        });
        self.goals.last().expect("goal just pushed")
    }

    /// Record a savings contribution toward a goal
    ///
    /// `current_amount` only ever grows through this path.
    pub fn contribute_to_goal(&mut self, id: i64, amount: i64) -> Result<&Goal> {
        if amount <= 0 {
            return Err(Error::InvalidData(format!(
                "Contribution must be positive, got {}",
                amount
            )));
        }
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| Error::NotFound(format!("Goal {}", id)))?;
        goal.current_amount += amount;
        Ok(goal)
    }

    /// Push an advisory notification
    pub fn push_notification(
        &mut self,
        title: &str,
        message: &str,
        kind: NotificationKind,
        date: &str,
    ) -> &Notification {
        let id = self.next_id();
        self.notifications.push(Notification {
            id,
            title: title.to_string(),
            message: message.to_string(),
            kind,
            date: date.to_string(),
            read: false,
        });
        self.notifications.last().unwrap()
    }

    /// Remove a notification by id (explicit user dismissal)
    pub fn dismiss_notification(&mut self, id: i64) -> Result<()> {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        if self.notifications.len() == before {
            return Err(Error::NotFound(format!("Notification {}", id)));
        }
        Ok(())
    }

    /// Append a message to the chat history
    pub fn push_chat_message(
        &mut self,
        role: ChatRole,
        text: &str,
        timestamp: DateTime<Utc>,
    ) -> &ChatMessage {
        let id = self.next_id();
        self.chat_history.push(ChatMessage {
            id,
            role,
            text: text.to_string(),
            timestamp,
        });
        self.chat_history.last().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TxKind};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_tx(amount: i64, description: &str) -> NewTransaction {
        NewTransaction::new(
            amount,
            description,
            Category::Food,
            date(2023, 10, 5),
            TxKind::Expense,
        )
        .unwrap()
    }

    #[test]
    fn test_add_transaction_prepends_and_assigns_ids() {
        let mut state = AppState::new();
        let first_id = state.add_transaction(new_tx(100, "first")).id;
        let second_id = state.add_transaction(new_tx(200, "second")).id;

        assert_ne!(first_id, second_id);
        assert_eq!(state.transactions[0].description, "second");
        assert_eq!(state.transactions[1].description, "first");
    }

    #[test]
    fn test_replace_transaction_keeps_id() {
        let mut state = AppState::new();
        let id = state.add_transaction(new_tx(100, "typo")).id;

        let fixed = state.replace_transaction(id, new_tx(150, "fixed")).unwrap();
        assert_eq!(fixed.id, id);
        assert_eq!(fixed.amount, 150);
        assert_eq!(state.transactions.len(), 1);
    }

    #[test]
    fn test_replace_missing_transaction() {
        let mut state = AppState::new();
        assert!(matches!(
            state.replace_transaction(99, new_tx(1, "x")),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_contribute_to_goal_grows_current() {
        let mut state = AppState::new();
        let id = state
            .add_goal(NewGoal::new("Trip", 25000, 5000, date(2024, 3, 15), "🌴", "pink").unwrap())
            .id;

        state.contribute_to_goal(id, 2000).unwrap();
        assert_eq!(state.goals[0].current_amount, 7000);
        assert!(state.contribute_to_goal(id, 0).is_err());
        assert!(state.contribute_to_goal(id, -5).is_err());
    }

    #[test]
    fn test_dismiss_notification() {
        let mut state = AppState::new();
        let id = state
            .push_notification("Hi", "there", NotificationKind::Tip, "Just now")
            .id;

        state.dismiss_notification(id).unwrap();
        assert!(state.notifications.is_empty());
        assert!(state.dismiss_notification(id).is_err());
    }

    #[test]
    fn test_seeded_state_shape() {
        let state = AppState::seeded(date(2023, 10, 10));
        assert_eq!(state.transactions.len(), 5);
        // newest first: salary (dated the 1st) added first, so it sits last
        assert_eq!(state.transactions[4].description, "Salary Credit");
        assert_eq!(state.goals.len(), 3);
        assert_eq!(state.subscriptions.len(), 3);
        assert_eq!(state.notifications.len(), 2);
    }

    #[test]
    fn test_seeded_ids_are_unique() {
        let state = AppState::seeded(date(2023, 10, 10));
        let mut ids: Vec<i64> = state
            .transactions
            .iter()
            .map(|t| t.id)
            .chain(state.goals.iter().map(|g| g.id))
            .chain(state.subscriptions.iter().map(|s| s.id))
            .chain(state.notifications.iter().map(|n| n.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5 + 3 + 3 + 2);
    }

    #[test]
    fn test_state_round_trips_through_json() {
        let state = AppState::seeded(date(2023, 10, 10));
        let json = serde_json::to_string(&state).unwrap();
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.transactions.len(), state.transactions.len());
        // id counter survives the round trip
        let mut mutated = back;
        let id = mutated.add_transaction(new_tx(1, "after reload")).id;
        assert!(state.transactions.iter().all(|tx| tx.id != id));
    }
}
