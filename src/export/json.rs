use crate::errors::{AppError, AppResult};
use crate::export::model::events_to_export;
use crate::models::AttendanceEvent;

/// Pretty-printed JSON array with the same fields as the CSV rows.
pub fn to_json(filtered: &[AttendanceEvent]) -> AppResult<String> {
    if filtered.is_empty() {
        return Err(AppError::EmptyExport);
    }

    Ok(serde_json::to_string_pretty(&events_to_export(filtered))?)
}
