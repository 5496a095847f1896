//! Response parsing helpers for advisor backends
//!
//! Model responses are plain text that often carries extra wording around the
//! answer; these helpers extract what the app needs from them.

use std::str::FromStr;

use crate::models::Category;

/// Map a model's categorization response onto the closed category set
///
/// Tries an exact (case-insensitive) match first, then a substring match over
/// the known category names, and falls back to `Other`. A garbled response
/// degrades to the fallback category instead of failing.
pub fn parse_category(response: &str) -> Category {
    let text = response.trim().trim_matches(|c: char| c == '"' || c == '.');

    if let Ok(category) = Category::from_str(text) {
        return category;
    }

    let lower = text.to_lowercase();
    for category in Category::all() {
        if lower.contains(&category.as_str().to_lowercase()) {
            return *category;
        }
    }

    Category::Other
}
