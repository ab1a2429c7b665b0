//! Read-only views over the ledger: presence, filtering, session lengths
//! and the summary counters. Nothing here mutates events or reads the wall
//! clock; "now" is always a parameter.

use crate::models::{AttendanceEvent, Query, StatusFilter, SummaryCounts};
use crate::utils::date::{day_bounds, end_of_day, local_date, start_of_day, today};
use crate::utils::formatting::session_label;
use std::collections::{BTreeSet, HashMap};

/// Ids whose latest event (by insertion order) is a check-in.
pub fn present_ids(events: &[AttendanceEvent]) -> BTreeSet<String> {
    let mut last = HashMap::new();
    for ev in events {
        last.insert(ev.id.as_str(), ev.action);
    }

    last.into_iter()
        .filter(|(_, action)| action.is_in())
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Latest check-in of every present person, oldest first.
pub fn present_people(events: &[AttendanceEvent]) -> Vec<&AttendanceEvent> {
    let mut last: HashMap<&str, &AttendanceEvent> = HashMap::new();
    for ev in events {
        last.insert(ev.id.as_str(), ev);
    }

    let mut out: Vec<&AttendanceEvent> = last
        .into_values()
        .filter(|ev| ev.action.is_in())
        .collect();
    out.sort_by(|a, b| a.ts.cmp(&b.ts).then_with(|| a.id.cmp(&b.id)));
    out
}

fn matches_text(ev: &AttendanceEvent, needle: &str) -> bool {
    ev.name.to_lowercase().contains(needle) || ev.id.to_lowercase().contains(needle)
}

/// Apply `query` and return the matching events sorted by timestamp.
///
/// Steps run in a fixed order: text, date range, status. The `present`
/// status always looks at the whole ledger, not at what survived the
/// earlier steps.
pub fn filter(events: &[AttendanceEvent], query: &Query) -> Vec<AttendanceEvent> {
    let needle = query
        .text
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);
    let from = query.from.map(start_of_day);
    let to = query.to.map(end_of_day);
    let present = (query.status == StatusFilter::Present).then(|| present_ids(events));

    let mut out: Vec<AttendanceEvent> = events
        .iter()
        .filter(|ev| needle.as_deref().is_none_or(|q| matches_text(ev, q)))
        .filter(|ev| from.is_none_or(|f| ev.ts >= f))
        .filter(|ev| to.is_none_or(|t| ev.ts <= t))
        .filter(|ev| match query.status {
            StatusFilter::All => true,
            StatusFilter::Checkin => ev.action.is_in(),
            StatusFilter::Checkout => ev.action.is_out(),
            StatusFilter::Present => present.as_ref().is_some_and(|p| p.contains(&ev.id)),
        })
        .cloned()
        .collect();

    out.sort_by_key(|ev| ev.ts);
    out
}

/// Length in milliseconds of the session opened by the check-in at `index`.
///
/// The session ends at the first later check-out of the same person inside
/// `filtered`, or at `now_ms` when there is none. Check-out rows, bad indexes
/// and non-positive spans have no session.
pub fn session_millis(filtered: &[AttendanceEvent], index: usize, now_ms: i64) -> Option<i64> {
    let row = filtered.get(index)?;
    if !row.action.is_in() {
        return None;
    }

    let end = filtered[index + 1..]
        .iter()
        .find(|r| r.id == row.id && r.action.is_out() && r.ts > row.ts)
        .map_or(now_ms, |r| r.ts);

    // stored timestamps are untrusted; an overflowing span has no session
    end.checked_sub(row.ts).filter(|ms| *ms > 0)
}

/// `session_millis` formatted as `HHh MMm`.
pub fn session_duration(filtered: &[AttendanceEvent], index: usize, now_ms: i64) -> Option<String> {
    session_millis(filtered, index, now_ms).map(session_label)
}

/// Present count and number of events on the local day of `now_ms`.
pub fn summary_counts(events: &[AttendanceEvent], now_ms: i64) -> SummaryCounts {
    let day = local_date(now_ms).unwrap_or_else(today);
    let (start, end) = day_bounds(day);

    SummaryCounts {
        present_count: present_ids(events).len(),
        today_count: events
            .iter()
            .filter(|ev| ev.ts >= start && ev.ts <= end)
            .count(),
    }
}

/// One display row of a filtered view.
#[derive(Debug, Clone)]
pub struct ViewRow<'a> {
    pub number: usize,
    pub event: &'a AttendanceEvent,
    pub session: Option<String>,
}

/// Number the filtered rows from 1 and attach session lengths.
pub fn rows(filtered: &[AttendanceEvent], now_ms: i64) -> Vec<ViewRow<'_>> {
    filtered
        .iter()
        .enumerate()
        .map(|(i, event)| ViewRow {
            number: i + 1,
            event,
            session: session_duration(filtered, i, now_ms),
        })
        .collect()
}
