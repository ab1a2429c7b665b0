use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::load_events;
use crate::core::view;
use crate::errors::AppResult;
use crate::models::{AttendanceEvent, SummaryCounts};
use crate::ui::messages::info;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::colors::{colorize_action, colorize_optional};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filters } = cmd {
        let query = filters.to_query(cfg)?;
        let pool = open_db(cfg)?;
        let events = load_events(&pool, &cfg.storage_key);
        let now = SystemClock.now_ms();

        let filtered = view::filter(&events, &query);

        println!("{}", summary_line(view::summary_counts(&events, now)));
        println!();

        if filtered.is_empty() {
            info("No records match");
            return Ok(());
        }

        print!("{}", render_table(&filtered, now));
    }
    Ok(())
}

/// `<n> present • <m> total today`
pub fn summary_line(counts: SummaryCounts) -> String {
    format!(
        "{} present • {} total today",
        counts.present_count, counts.today_count
    )
}

pub fn render_table(filtered: &[AttendanceEvent], now_ms: i64) -> String {
    let mut table = Table::new(["#", "Name", "ID", "Action", "Time", "Session"]);

    for row in view::rows(filtered, now_ms) {
        table.add_row(vec![
            row.number.to_string(),
            row.event.name.clone(),
            row.event.id.clone(),
            colorize_action(row.event.action),
            row.event.local_time_str(),
            colorize_optional(row.session.as_deref()),
        ]);
    }

    table.render()
}
