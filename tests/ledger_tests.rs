mod common;
use attendlog::core::ledger::{Ledger, STORAGE_KEY, load_events};
use attendlog::core::view::present_ids;
use attendlog::db::{DbPool, KeyValueStore, MemoryStore};
use attendlog::errors::AppError;
use attendlog::models::{Action, NewEvent};
use attendlog::utils::clock::FixedClock;
use common::setup_test_db;

const T0: i64 = 1_756_710_000_000;

fn checkin(id: &str, name: &str) -> NewEvent {
    NewEvent::new(id, name, Action::CheckIn)
}

fn checkout(id: &str, name: &str) -> NewEvent {
    NewEvent::new(id, name, Action::CheckOut)
}

#[test]
fn test_append_trims_and_stamps_with_clock() {
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::new());

    let stored = ledger
        .append(
            NewEvent {
                id: "  E1 ".into(),
                name: "\tAnn  ".into(),
                action: "checkin".into(),
            },
            &clock,
        )
        .expect("append");

    assert_eq!(stored.id, "E1");
    assert_eq!(stored.name, "Ann");
    assert_eq!(stored.action, Action::CheckIn);
    assert_eq!(stored.ts, T0);
    assert_eq!(ledger.events(), &[stored]);
}

#[test]
fn test_blank_id_or_name_is_rejected() {
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::new());

    let err = ledger.append(checkin("   ", "Ann"), &clock).unwrap_err();
    assert!(matches!(err, AppError::Validation));
    assert_eq!(err.to_string(), "Name and ID are required.");

    let err = ledger.append(checkin("E1", ""), &clock).unwrap_err();
    assert!(matches!(err, AppError::Validation));

    assert!(ledger.is_empty());
    assert_eq!(ledger.store().raw(STORAGE_KEY), None);
}

#[test]
fn test_unknown_action_defaults_to_checkin() {
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::new());

    let stored = ledger
        .append(
            NewEvent {
                id: "E1".into(),
                name: "Ann".into(),
                action: "arrive".into(),
            },
            &clock,
        )
        .unwrap();
    assert_eq!(stored.action, Action::CheckIn);

    clock.advance(1_000);
    let stored = ledger
        .append(
            NewEvent {
                id: "E1".into(),
                name: "Ann".into(),
                action: " CheckOut ".into(),
            },
            &clock,
        )
        .unwrap();
    assert_eq!(stored.action, Action::CheckOut);
}

#[test]
fn test_duplicate_checkin_is_rejected() {
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::new());

    ledger.append(checkin("E1", "Ann"), &clock).unwrap();
    clock.advance(5_000);
    let err = ledger.append(checkin("E1", "Ann"), &clock).unwrap_err();

    assert!(matches!(err, AppError::DuplicateState(_)));
    assert_eq!(err.to_string(), "Already checked in.");
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_checkout_without_history_then_duplicate_checkout() {
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::new());

    // a first check-out has nothing to conflict with
    ledger.append(checkout("E2", "Bob"), &clock).unwrap();
    let err = ledger.append(checkout("E2", "Bob"), &clock).unwrap_err();
    assert_eq!(err.to_string(), "Already checked out.");
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_alternation_is_per_person() {
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::new());

    let script = [
        ("E1", Action::CheckIn, true),
        ("E2", Action::CheckIn, true),
        ("E1", Action::CheckIn, false),
        ("E1", Action::CheckOut, true),
        ("E2", Action::CheckIn, false),
        ("E1", Action::CheckOut, false),
        ("E1", Action::CheckIn, true),
        ("E2", Action::CheckOut, true),
        ("E2", Action::CheckOut, false),
    ];

    for (id, action, accepted) in script {
        clock.advance(60_000);
        let before = ledger.len();
        let result = ledger.append(NewEvent::new(id, "Someone", action), &clock);
        assert_eq!(result.is_ok(), accepted, "{id} {action:?}");
        assert_eq!(ledger.len(), before + usize::from(accepted));
    }

    let present = present_ids(ledger.events());
    assert_eq!(present.into_iter().collect::<Vec<_>>(), vec!["E1".to_string()]);
}

#[test]
fn test_every_append_persists_the_whole_ledger() {
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::new());

    ledger.append(checkin("E1", "Ann"), &clock).unwrap();
    clock.advance(90_000);
    ledger.append(checkout("E1", "Ann"), &clock).unwrap();

    let raw = ledger.store().raw(STORAGE_KEY).expect("persisted");
    let json: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"id": "E1", "name": "Ann", "action": "checkin", "ts": T0},
            {"id": "E1", "name": "Ann", "action": "checkout", "ts": T0 + 90_000},
        ])
    );

    let reloaded = Ledger::load(ledger.into_store());
    assert_eq!(reloaded.len(), 2);
}

#[test]
fn test_missing_or_corrupt_state_loads_empty() {
    assert!(load_events(&MemoryStore::new(), STORAGE_KEY).is_empty());
    assert!(load_events(&MemoryStore::with_value(STORAGE_KEY, ""), STORAGE_KEY).is_empty());
    assert!(load_events(&MemoryStore::with_value(STORAGE_KEY, "{not json"), STORAGE_KEY).is_empty());
    assert!(
        load_events(
            &MemoryStore::with_value(STORAGE_KEY, r#"{"id":"E1"}"#),
            STORAGE_KEY
        )
        .is_empty()
    );
    assert!(load_events(&MemoryStore::with_value(STORAGE_KEY, "42"), STORAGE_KEY).is_empty());
}

#[test]
fn test_null_and_malformed_entries_are_skipped() {
    let raw = r#"[
        null,
        {"id":"E1","name":"Ann","action":"checkin","ts":1000},
        false,
        {"id":"E2","name":"Bob","action":"wander","ts":2000},
        {"id":"E3","name":"Cid","action":"checkout","ts":3000}
    ]"#;
    let events = load_events(&MemoryStore::with_value(STORAGE_KEY, raw), STORAGE_KEY);

    assert_eq!(common::ids(&events), vec!["E1", "E3"]);
}

#[test]
fn test_undecodable_entries_survive_append_and_go_with_clear() {
    let raw = r#"[
        {"id":"E1","name":"Ann","action":"checkin","ts":1000},
        null,
        {"id":"E2","name":"Bob","action":"wander","ts":2000}
    ]"#;
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::with_value(STORAGE_KEY, raw));
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger.undecoded_len(), 2);

    ledger.append(checkout("E1", "Ann"), &clock).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(ledger.store().raw(STORAGE_KEY).expect("persisted")).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"id": "E1", "name": "Ann", "action": "checkin", "ts": 1000},
            {"id": "E1", "name": "Ann", "action": "checkout", "ts": T0},
            null,
            {"id": "E2", "name": "Bob", "action": "wander", "ts": 2000},
        ])
    );

    // reloading keeps them aside again
    let mut ledger = Ledger::load(ledger.into_store());
    assert_eq!(ledger.len(), 2);
    assert_eq!(ledger.undecoded_len(), 2);

    assert_eq!(ledger.clear().unwrap(), 2);
    assert_eq!(ledger.undecoded_len(), 0);
    assert_eq!(ledger.store().raw(STORAGE_KEY), Some("[]"));
}

#[test]
fn test_failed_write_rolls_back_append_and_clear() {
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::new());
    ledger.append(checkin("E1", "Ann"), &clock).unwrap();

    let mut store = ledger.into_store();
    store.set_read_only(true);
    let mut ledger = Ledger::load(store);

    clock.advance(1_000);
    assert!(matches!(
        ledger.append(checkout("E1", "Ann"), &clock),
        Err(AppError::Io(_))
    ));
    assert_eq!(ledger.len(), 1);

    assert!(ledger.clear().is_err());
    assert_eq!(ledger.len(), 1);
}

#[test]
fn test_clear_empties_and_persists() {
    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(MemoryStore::new());
    ledger.append(checkin("E1", "Ann"), &clock).unwrap();
    ledger.append(checkin("E2", "Bob"), &clock).unwrap();

    assert_eq!(ledger.clear().unwrap(), 2);
    assert!(ledger.is_empty());
    assert_eq!(ledger.store().raw(STORAGE_KEY), Some("[]"));

    // after a clear the dedup history is gone too
    ledger.append(checkin("E1", "Ann"), &clock).unwrap();
}

#[test]
fn test_sqlite_store_keeps_ledger_between_opens() {
    let db_path = setup_test_db("ledger_sqlite_roundtrip");
    let clock = FixedClock::at(T0);

    {
        let mut pool = DbPool::open(&db_path).expect("open db");
        let mut ledger = Ledger::load(&mut pool);
        ledger.append(checkin("E1", "Ann"), &clock).unwrap();
        clock.advance(60_000);
        ledger.append(checkout("E1", "Ann"), &clock).unwrap();
    }

    let pool = DbPool::open(&db_path).expect("reopen db");
    let events = load_events(&pool, STORAGE_KEY);
    assert_eq!(events.len(), 2);
    assert_eq!(events[1].action, Action::CheckOut);

    let raw = pool.get(STORAGE_KEY).unwrap().unwrap();
    assert!(raw.contains(r#""action":"checkout""#));
}

#[test]
fn test_custom_key_is_isolated() {
    let clock = FixedClock::at(T0);
    let mut pool = DbPool::in_memory().unwrap();

    {
        let mut ledger = Ledger::load_with_key(&mut pool, "site.a");
        ledger.append(checkin("E1", "Ann"), &clock).unwrap();
    }

    assert_eq!(load_events(&pool, "site.a").len(), 1);
    assert!(load_events(&pool, STORAGE_KEY).is_empty());
}

#[test]
fn test_corrupt_sqlite_value_is_treated_as_empty() {
    let mut pool = DbPool::in_memory().unwrap();
    pool.set(STORAGE_KEY, "]]garbage").unwrap();

    let clock = FixedClock::at(T0);
    let mut ledger = Ledger::load(&mut pool);
    assert!(ledger.is_empty());
    ledger.append(checkin("E1", "Ann"), &clock).unwrap();
    assert_eq!(load_events(&pool, STORAGE_KEY).len(), 1);
}
