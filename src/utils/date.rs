//! Local-calendar helpers. Everything the view engine compares is epoch
//! milliseconds; these turn local dates into inclusive millisecond bounds.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Local calendar date of an epoch-millisecond instant.
pub fn local_date(ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.with_timezone(&Local).date_naive())
}

/// Epoch milliseconds of a local wall-clock time.
///
/// Ambiguous times (DST fold) resolve to the earlier instant; times that do
/// not exist (DST gap) move forward to the first valid instant after the gap.
pub fn local_millis(naive: NaiveDateTime) -> i64 {
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.timestamp_millis(),
        LocalResult::Ambiguous(early, _) => early.timestamp_millis(),
        LocalResult::None => Local
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .map(|dt| dt.timestamp_millis())
            .unwrap_or_else(|| naive.and_utc().timestamp_millis()),
    }
}

/// Local midnight of `date`.
pub fn start_of_day(date: NaiveDate) -> i64 {
    local_millis(date.and_time(chrono::NaiveTime::MIN))
}

/// Last millisecond (23:59:59.999 local) of `date`.
pub fn end_of_day(date: NaiveDate) -> i64 {
    match date.succ_opt() {
        Some(next) => start_of_day(next) - 1,
        None => start_of_day(date) + 24 * 60 * 60 * 1000 - 1,
    }
}

/// Inclusive `[start, end]` millisecond bounds of a local day.
pub fn day_bounds(date: NaiveDate) -> (i64, i64) {
    (start_of_day(date), end_of_day(date))
}

/// `YYYY-MM-DD` label for file names.
pub fn date_label(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
