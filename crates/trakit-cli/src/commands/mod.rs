//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `analytics` - Category breakdown and spending-pattern views
//! - `chat` - AI assistant round-trips
//! - `core` - Init command and shared utilities (store/date helpers)
//! - `dashboard` - Financial overview
//! - `goals` - Goal listing, creation, contributions
//! - `notifications` - Notification listing and dismissal
//! - `subscriptions` - Subscription listing
//! - `transactions` - Transaction commands (add, edit, list)

pub mod analytics;
pub mod chat;
pub mod core;
pub mod dashboard;
pub mod goals;
pub mod notifications;
pub mod subscriptions;
pub mod transactions;

// Re-export command functions for main.rs
pub use analytics::*;
pub use chat::*;
pub use core::*;
pub use dashboard::*;
pub use goals::*;
pub use notifications::*;
pub use subscriptions::*;
pub use transactions::*;

/// Format a whole-unit amount with thousands separators
pub fn fmt_amount(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{}", out)
    } else {
        out
    }
}

/// A fixed-width proportional bar for terminal charts
pub fn bar(value: i64, max: i64, width: usize) -> String {
    if max <= 0 || value <= 0 {
        return String::new();
    }
    let filled = ((value as f64 / max as f64) * width as f64).round() as usize;
    "█".repeat(filled.clamp(1, width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_amount() {
        assert_eq!(fmt_amount(0), "0");
        assert_eq!(fmt_amount(999), "999");
        assert_eq!(fmt_amount(1500), "1,500");
        assert_eq!(fmt_amount(50000), "50,000");
        assert_eq!(fmt_amount(1234567), "1,234,567");
        assert_eq!(fmt_amount(-2500), "-2,500");
    }

    #[test]
    fn test_bar() {
        assert_eq!(bar(0, 100, 10), "");
        assert_eq!(bar(100, 100, 10).chars().count(), 10);
        assert_eq!(bar(1, 1000, 10).chars().count(), 1); // never fully empty for nonzero
    }
}
