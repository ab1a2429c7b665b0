use super::action::Action;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One check-in or check-out, as stored in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceEvent {
    pub id: String,     // ⇔ person id, trimmed
    pub name: String,   // ⇔ display name, trimmed
    pub action: Action, // ⇔ "checkin" | "checkout"
    pub ts: i64,        // ⇔ epoch milliseconds, set by the ledger
}

impl AttendanceEvent {
    pub fn utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.ts)
    }

    pub fn local(&self) -> Option<DateTime<Local>> {
        self.utc().map(|dt| dt.with_timezone(&Local))
    }

    /// `YYYY-MM-DD HH:MM:SS` in local time.
    pub fn local_time_str(&self) -> String {
        self.local()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default()
    }

    /// ISO-8601 UTC with millisecond precision, e.g. `2025-09-01T07:00:00.000Z`.
    pub fn iso_time(&self) -> String {
        self.utc()
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string())
            .unwrap_or_default()
    }
}

/// Raw input for an append, before trimming and validation.
#[derive(Debug, Clone, Default)]
pub struct NewEvent {
    pub id: String,
    pub name: String,
    pub action: String,
}

impl NewEvent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, action: Action) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            action: action.as_str().to_string(),
        }
    }
}
