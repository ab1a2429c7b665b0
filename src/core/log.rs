use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const OP_WIDTH_MAX: usize = 60;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "checkin" => Colour::Green,
        "checkout" => Colour::Red,
        "clear" => Colour::Yellow,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

/// Operation + target as one column, truncated to `OP_WIDTH_MAX` visible
/// characters; only the operation word is coloured.
fn format_operation(entry: &LogEntry) -> String {
    let op_target = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if op_target.chars().count() > OP_WIDTH_MAX {
        let mut s = op_target.chars().take(OP_WIDTH_MAX - 3).collect::<String>();
        s.push_str("...");
        s
    } else {
        op_target
    };

    let color = color_for_operation(&entry.operation);
    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Lines as printed by `log --print`, without trailing newlines.
    pub fn render(entries: &[LogEntry]) -> Vec<String> {
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);

        let dates: Vec<String> = entries
            .iter()
            .map(|e| {
                chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone())
            })
            .collect();
        let date_w = dates.iter().map(String::len).max().unwrap_or(10);

        let ops: Vec<String> = entries.iter().map(format_operation).collect();
        let op_w = ops
            .iter()
            .map(|o| strip_ansi(o).chars().count())
            .max()
            .unwrap_or(10);

        entries
            .iter()
            .zip(dates.iter().zip(ops.iter()))
            .map(|(entry, (date, op))| {
                let padding = " ".repeat(op_w.saturating_sub(strip_ansi(op).chars().count()));
                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    entry.id,
                    date,
                    op,
                    padding,
                    entry.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            info("Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::render(&entries) {
            println!("{}", line);
        }

        Ok(())
    }
}
