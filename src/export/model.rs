// src/export/model.rs

use crate::models::AttendanceEvent;
use serde::Serialize;

/// Flat export row. `row` is the 1-based position in the filtered view.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EventExport {
    pub row: usize,
    pub name: String,
    pub id: String,
    pub action: String,
    pub ts: i64,
    pub iso_time: String,
}

impl EventExport {
    pub fn from_event(row: usize, ev: &AttendanceEvent) -> Self {
        Self {
            row,
            name: ev.name.clone(),
            id: ev.id.clone(),
            action: ev.action.as_str().to_string(),
            ts: ev.ts,
            iso_time: ev.iso_time(),
        }
    }

    pub(crate) fn to_row(&self) -> [String; 6] {
        [
            self.row.to_string(),
            self.name.clone(),
            self.id.clone(),
            self.action.clone(),
            self.ts.to_string(),
            self.iso_time.clone(),
        ]
    }
}

/// CSV header row.
pub(crate) fn get_headers() -> [&'static str; 6] {
    ["#", "Name", "ID", "Action", "Timestamp", "ISO Time"]
}

pub(crate) fn events_to_export(events: &[AttendanceEvent]) -> Vec<EventExport> {
    events
        .iter()
        .enumerate()
        .map(|(i, ev)| EventExport::from_event(i + 1, ev))
        .collect()
}
