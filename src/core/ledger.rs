//! Append-only attendance ledger.
//!
//! The ledger owns its store and writes the whole sequence back after every
//! mutation, including stored entries it could not decode. A failed write
//! rolls the in-memory change back before the error reaches the caller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::kv::KeyValueStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Action, AttendanceEvent, NewEvent};
use crate::utils::clock::Clock;

/// Key the serialized ledger is stored under.
pub const STORAGE_KEY: &str = "attendance.records.v1";

#[derive(Serialize)]
#[serde(untagged)]
enum Stored<'a> {
    Event(&'a AttendanceEvent),
    Raw(&'a Value),
}

pub struct Ledger<S: KeyValueStore> {
    store: S,
    key: String,
    events: Vec<AttendanceEvent>,
    /// Stored entries that did not decode. Written back untouched so a save
    /// never destroys data this build cannot read.
    undecoded: Vec<Value>,
}

/// Read the persisted ledger. Missing, unreadable or malformed content yields
/// an empty list; entries that do not decode are skipped one by one.
pub fn load_events<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> Vec<AttendanceEvent> {
    load_split(store, key).0
}

/// Decoded events plus the raw entries that failed to decode, both in
/// stored order.
fn load_split<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> (Vec<AttendanceEvent>, Vec<Value>) {
    let raw = match store.get(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        _ => return (Vec::new(), Vec::new()),
    };

    let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&raw) else {
        return (Vec::new(), Vec::new());
    };

    let mut events = Vec::with_capacity(items.len());
    let mut undecoded = Vec::new();
    for item in items {
        match AttendanceEvent::deserialize(&item) {
            Ok(event) => events.push(event),
            Err(_) => undecoded.push(item),
        }
    }
    (events, undecoded)
}

impl<S: KeyValueStore> Ledger<S> {
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, STORAGE_KEY)
    }

    pub fn load_with_key(store: S, key: &str) -> Self {
        let (events, undecoded) = load_split(&store, key);
        Self {
            store,
            key: key.to_string(),
            events,
            undecoded,
        }
    }

    /// Events in insertion order.
    pub fn events(&self) -> &[AttendanceEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Most recent event for `id`, by insertion order.
    pub fn last_event_of(&self, id: &str) -> Option<&AttendanceEvent> {
        self.events.iter().rev().find(|ev| ev.id == id)
    }

    /// Validate, dedup and store a new event stamped with `clock`'s time.
    pub fn append(&mut self, candidate: NewEvent, clock: &dyn Clock) -> AppResult<AttendanceEvent> {
        let id = candidate.id.trim();
        let name = candidate.name.trim();

        if id.is_empty() || name.is_empty() {
            return Err(AppError::Validation);
        }

        let action = Action::from_input(&candidate.action);

        // TODO: keep a person id → last action map once ledgers grow large;
        // this backward scan runs on every append.
        if let Some(last) = self.last_event_of(id)
            && last.action == action
        {
            return Err(AppError::DuplicateState(action.state()));
        }

        let event = AttendanceEvent {
            id: id.to_string(),
            name: name.to_string(),
            action,
            ts: clock.now_ms(),
        };

        self.events.push(event.clone());
        if let Err(e) = self.persist() {
            self.events.pop();
            return Err(e);
        }

        Ok(event)
    }

    /// Number of stored entries kept as-is because they did not decode.
    pub fn undecoded_len(&self) -> usize {
        self.undecoded.len()
    }

    /// Drop every event, undecodable entries included. Returns how many
    /// events were removed.
    pub fn clear(&mut self) -> AppResult<usize> {
        let previous = std::mem::take(&mut self.events);
        let previous_undecoded = std::mem::take(&mut self.undecoded);
        if let Err(e) = self.persist() {
            self.events = previous;
            self.undecoded = previous_undecoded;
            return Err(e);
        }
        Ok(previous.len())
    }

    /// Decoded events first, then undecodable entries in their stored order.
    fn persist(&mut self) -> AppResult<()> {
        let items: Vec<Stored<'_>> = self
            .events
            .iter()
            .map(Stored::Event)
            .chain(self.undecoded.iter().map(Stored::Raw))
            .collect();
        let json = serde_json::to_string(&items)?;
        self.store.set(&self.key, &json)
    }
}
