use crate::errors::{AppError, AppResult};
use crate::export::model::{events_to_export, get_headers};
use crate::models::AttendanceEvent;
use ::csv::{QuoteStyle, Terminator, WriterBuilder};

/// Build the CSV text for a filtered view.
///
/// Every field is quoted and embedded quotes are doubled. Rows are joined
/// with CRLF; there is no terminator after the last row.
pub fn to_csv(filtered: &[AttendanceEvent]) -> AppResult<String> {
    if filtered.is_empty() {
        return Err(AppError::EmptyExport);
    }

    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    wtr.write_record(get_headers())?;
    for item in events_to_export(filtered) {
        wtr.write_record(item.to_row())?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    let mut text =
        String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))?;

    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
    }

    Ok(text)
}
