//! Formatting utilities used for CLI and export outputs.

/// Session length from a millisecond span, as `HHh MMm`; the sub-minute
/// remainder is dropped.
pub fn session_label(ms: i64) -> String {
    let mins = ms / 60_000;
    format!("{:02}h {:02}m", mins / 60, mins % 60)
}
