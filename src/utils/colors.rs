//! ANSI color helper utilities for terminal output.
use crate::models::Action;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

/// Check-In badges are green, Check-Out badges red.
pub fn colorize_action(action: Action) -> String {
    let color = if action.is_in() { GREEN } else { RED };
    format!("{color}{}{RESET}", action.label())
}

/// Grey placeholder for empty cells.
pub fn colorize_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => format!("{GREY}--{RESET}"),
    }
}
