//! End-to-end tests for the roll → record → persist pipeline.

use rw_rules::{RollParams, RollReport, RulesError};
use rw_session::{
    FileStorage, HistoryStorage, MemoryStorage, RollResponse, RollSession, SessionConfig,
};

fn config() -> SessionConfig {
    SessionConfig::default().with_seed(7)
}

#[test]
fn fifteen_rolls_keep_ten_most_recent() {
    let mut session = RollSession::new(MemoryStorage::default(), &config());
    let mut shown = Vec::new();
    for i in 1..=15 {
        let params = RollParams::new().with("diceCount", i.to_string());
        shown.push(session.roll("dnd", &params).to_string());
    }
    shown.reverse();
    let expected = &shown[..10];

    assert_eq!(session.history().entries(), expected);
    assert_eq!(session.storage().load(), expected);
    assert!(session.history().latest().unwrap().starts_with("D&D (15d20)"));
}

#[test]
fn invalid_input_leaves_history_alone() {
    let mut session = RollSession::new(MemoryStorage::default(), &config());
    session.roll("exalted", &RollParams::new());
    session.roll("ore", &RollParams::new());
    let before = session.history().clone();
    let stored_before = session.storage().raw().map(str::to_string);

    let response = session.roll("oneRing", &RollParams::new().with("diceCount", "six"));
    assert!(matches!(
        response,
        RollResponse::Rejected(RulesError::InvalidInput(_))
    ));
    assert_eq!(session.history(), &before);
    assert_eq!(session.storage().raw().map(str::to_string), stored_before);
}

#[test]
fn history_survives_a_restart() {
    let mut session = RollSession::new(MemoryStorage::default(), &config());
    session.roll("runescape", &RollParams::new().with("advantage", "true"));
    let latest = session.history().latest().map(str::to_string);
    let storage = session.into_storage();

    let reopened = RollSession::new(storage, &config());
    assert_eq!(reopened.history().len(), 1);
    assert_eq!(reopened.history().latest().map(str::to_string), latest);
}

#[test]
fn malformed_storage_starts_empty() {
    let storage = MemoryStorage::with_raw("rollHistory", "<<corrupt>>");
    let mut session = RollSession::new(storage, &config());
    assert!(session.history().is_empty());

    session.roll("dnd", &RollParams::new());
    assert_eq!(session.history().len(), 1);
    assert_eq!(session.storage().load().len(), 1);
}

#[test]
fn legacy_capacity_of_twenty() {
    let cfg = config().with_history_capacity(20);
    let mut session = RollSession::new(MemoryStorage::default(), &cfg);
    for _ in 0..25 {
        session.roll("ore", &RollParams::new());
    }
    assert_eq!(session.history().len(), 20);
}

#[test]
fn clear_history_persists() {
    let mut session = RollSession::new(MemoryStorage::default(), &config());
    session.roll("dnd", &RollParams::new());
    session.clear_history().unwrap();
    assert!(session.history().is_empty());
    assert!(session.storage().load().is_empty());
}

#[test]
fn file_backed_session_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config().with_storage_key("diceHistory");

    let mut session = RollSession::new(FileStorage::from_config(dir.path(), &cfg), &cfg);
    let response = session.roll("exalted", &RollParams::new().with("doubleValues", "10,9"));
    let Some(RollReport::Exalted(roll)) = response.report() else {
        panic!("expected an Exalted report");
    };
    assert_eq!(roll.doubles, vec![9, 10]);
    assert!(dir.path().join("diceHistory.json").exists());

    let reopened = RollSession::new(FileStorage::from_config(dir.path(), &cfg), &cfg);
    assert_eq!(reopened.history().entries(), session.history().entries());
}

#[test]
fn each_system_produces_its_result_shape() {
    let mut session = RollSession::new(MemoryStorage::default(), &config());

    let ring = session.roll(
        "oneRing",
        &RollParams::new()
            .with("diceCount", "6")
            .with("targetNumber", "18"),
    );
    let Some(RollReport::OneRing(ring)) = ring.report() else {
        panic!("expected a One Ring report");
    };
    assert_eq!(ring.rolls.len(), 6);
    assert_eq!(ring.outcome.is_success(), ring.total >= 18);

    let rs = session.roll(
        "runescape",
        &RollParams::new()
            .with("targetNumber", "12")
            .with("advantage", "true")
            .with("disadvantage", "true"),
    );
    let Some(RollReport::Runescape(rs)) = rs.report() else {
        panic!("expected a RuneScape report");
    };
    assert_eq!(rs.rolls.len(), 3);
    assert_eq!(rs.kept, rs.rolls);
    assert_eq!(rs.outcome.is_success(), rs.total <= 12);

    assert_eq!(session.history().len(), 2);
}
