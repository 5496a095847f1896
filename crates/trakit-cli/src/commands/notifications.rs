//! Notification listing and dismissal

use anyhow::Result;
use chrono::NaiveDate;

use trakit_core::models::NotificationKind;
use trakit_core::store::Store;

use super::load_state;

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Alert => "⚠️",
        NotificationKind::Tip => "💡",
        NotificationKind::Success => "✅",
    }
}

pub fn cmd_notifications(store: &Store, today: NaiveDate, dismiss: Option<i64>) -> Result<()> {
    let mut state = load_state(store, today)?;

    if let Some(id) = dismiss {
        state.dismiss_notification(id)?;
        store.save(&state)?;
        println!("🗑️  Dismissed notification #{}", id);
        return Ok(());
    }

    println!();
    println!("🔔 Notifications");
    if state.notifications.is_empty() {
        println!("   All caught up!");
        return Ok(());
    }

    for n in &state.notifications {
        println!("   #{} {} {} - {} ({})", n.id, kind_icon(n.kind), n.title, n.message, n.date);
    }
    println!();
    println!("   Dismiss one with `trakit notifications --dismiss <id>`");
    Ok(())
}
