//! CLI command tests
//!
//! Commands run against a temp-dir store; advisor-backed paths use the mock.

use chrono::NaiveDate;
use clap::Parser;
use tempfile::TempDir;

use trakit_core::ai::AdvisorClient;
use trakit_core::store::Store;

use crate::cli::{Cli, Commands};
use crate::commands;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn test_store() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::new(dir.path().join("state.json"));
    (dir, store)
}

// ========== Argument Parsing Tests ==========

#[test]
fn test_parse_add_with_flags() {
    let cli = Cli::parse_from([
        "trakit", "add", "350", "Coffee", "--category", "food", "--date", "2023-10-05",
    ]);
    match cli.command {
        Commands::Add {
            amount,
            description,
            category,
            income,
            date,
            auto,
        } => {
            assert_eq!(amount, 350);
            assert_eq!(description, "Coffee");
            assert_eq!(category.as_deref(), Some("food"));
            assert!(!income);
            assert_eq!(date.as_deref(), Some("2023-10-05"));
            assert!(!auto);
        }
        _ => panic!("parsed wrong command"),
    }
}

#[test]
fn test_parse_chat_joins_words() {
    let cli = Cli::parse_from(["trakit", "chat", "How", "am", "I", "doing?"]);
    match cli.command {
        Commands::Chat { message } => assert_eq!(message.join(" "), "How am I doing?"),
        _ => panic!("parsed wrong command"),
    }
}

#[test]
fn test_parse_rejects_missing_amount() {
    assert!(Cli::try_parse_from(["trakit", "add"]).is_err());
}

// ========== Transaction Command Tests ==========

#[tokio::test]
async fn test_cmd_add_and_list() {
    let (_dir, store) = test_store();
    let today = date(2023, 10, 10);

    commands::cmd_add(
        &store, today, 350, "Coffee", Some("food"), false, None, false, None,
    )
    .await
    .unwrap();

    let state = store.load().unwrap();
    assert_eq!(state.transactions[0].description, "Coffee");
    assert_eq!(state.transactions[0].amount, 350);

    assert!(commands::cmd_list(&store, today, 10).is_ok());
}

#[tokio::test]
async fn test_cmd_add_rejects_bad_category() {
    let (_dir, store) = test_store();
    let result = commands::cmd_add(
        &store,
        date(2023, 10, 10),
        350,
        "Coffee",
        Some("groceries"),
        false,
        None,
        false,
        None,
    )
    .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_cmd_add_auto_uses_mock_advisor() {
    let (_dir, store) = test_store();
    let advisor = AdvisorClient::mock();

    commands::cmd_add(
        &store,
        date(2023, 10, 10),
        230,
        "Uber Trip",
        None,
        false,
        None,
        true,
        Some(&advisor),
    )
    .await
    .unwrap();

    let state = store.load().unwrap();
    assert_eq!(state.transactions[0].category.as_str(), "Travel");
}

#[tokio::test]
async fn test_cmd_add_auto_without_advisor_falls_back_to_other() {
    let (_dir, store) = test_store();

    commands::cmd_add(
        &store,
        date(2023, 10, 10),
        230,
        "Uber Trip",
        None,
        false,
        None,
        true,
        None,
    )
    .await
    .unwrap();

    let state = store.load().unwrap();
    assert_eq!(state.transactions[0].category.as_str(), "Other");
}

#[tokio::test]
async fn test_cmd_edit_replaces_by_id() {
    let (_dir, store) = test_store();
    let today = date(2023, 10, 10);

    commands::cmd_add(&store, today, 350, "Cofee", Some("food"), false, None, false, None)
        .await
        .unwrap();
    let id = store.load().unwrap().transactions[0].id;

    commands::cmd_edit(&store, today, id, 375, "Coffee", Some("food"), false, None).unwrap();

    let state = store.load().unwrap();
    assert_eq!(state.transactions[0].id, id);
    assert_eq!(state.transactions[0].description, "Coffee");
    assert_eq!(state.transactions[0].amount, 375);
}

// ========== View Command Tests ==========

#[test]
fn test_view_commands_run_on_seeded_state() {
    let (_dir, store) = test_store();
    let today = date(2023, 10, 10);

    assert!(commands::cmd_init(&store, today).is_ok());
    assert!(commands::cmd_dashboard(&store, today).is_ok());
    assert!(commands::cmd_analytics(&store, today).is_ok());
    assert!(commands::cmd_goals_list(&store, today).is_ok());
    assert!(commands::cmd_subs(&store, today).is_ok());
    assert!(commands::cmd_notifications(&store, today, None).is_ok());
}

#[test]
fn test_dashboard_runs_on_last_day_of_month() {
    let (_dir, store) = test_store();
    // degenerate safe-spend day must still render
    assert!(commands::cmd_dashboard(&store, date(2023, 10, 31)).is_ok());
}

// ========== Goal Command Tests ==========

#[test]
fn test_goal_add_and_save() {
    let (_dir, store) = test_store();
    let today = date(2023, 10, 10);

    commands::cmd_goals_add(&store, today, "Goa Trip", 25000, "2024-03-15", "🌴", "pink").unwrap();
    let id = store
        .load()
        .unwrap()
        .goals
        .iter()
        .find(|g| g.name == "Goa Trip")
        .unwrap()
        .id;

    commands::cmd_goals_save(&store, today, id, 5000).unwrap();
    let state = store.load().unwrap();
    let goal = state.goals.iter().find(|g| g.id == id).unwrap();
    assert_eq!(goal.current_amount, 5000);
}

#[test]
fn test_goal_add_rejects_zero_target() {
    let (_dir, store) = test_store();
    let result =
        commands::cmd_goals_add(&store, date(2023, 10, 10), "Nothing", 0, "2024-03-15", "x", "grey");
    assert!(result.is_err());
}

// ========== Notification Command Tests ==========

#[test]
fn test_notification_dismiss() {
    let (_dir, store) = test_store();
    let today = date(2023, 10, 10);

    commands::cmd_init(&store, today).unwrap();
    let id = store.load().unwrap().notifications[0].id;

    commands::cmd_notifications(&store, today, Some(id)).unwrap();
    assert!(store.load().unwrap().notifications.iter().all(|n| n.id != id));

    // dismissing again is a NotFound error
    assert!(commands::cmd_notifications(&store, today, Some(id)).is_err());
}

// ========== Chat Command Tests ==========

#[tokio::test]
async fn test_cmd_chat_with_mock_persists_history() {
    let (_dir, store) = test_store();
    let today = date(2023, 10, 10);
    let advisor = AdvisorClient::mock();

    commands::cmd_init(&store, today).unwrap();
    commands::cmd_chat(&store, today, Some(&advisor), "How am I doing?")
        .await
        .unwrap();

    let state = store.load().unwrap();
    assert_eq!(state.chat_history.len(), 2);
    assert_eq!(state.chat_history[0].text, "How am I doing?");
}

#[tokio::test]
async fn test_cmd_chat_without_advisor_is_graceful() {
    let (_dir, store) = test_store();
    let result = commands::cmd_chat(&store, date(2023, 10, 10), None, "hello").await;
    assert!(result.is_ok());
}
