use crate::cli::commands::list::summary_line;
use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::load_events;
use crate::core::view;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::formatting::session_label;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { who } = cmd {
        let pool = open_db(cfg)?;
        let events = load_events(&pool, &cfg.storage_key);
        let now = SystemClock.now_ms();

        println!("{}", summary_line(view::summary_counts(&events, now)));

        if *who {
            let present = view::present_people(&events);
            if present.is_empty() {
                return Ok(());
            }

            println!();
            header("Present");
            let mut table = Table::new(["Name", "ID", "Since", "For"]);
            for ev in present {
                let span = now.checked_sub(ev.ts).filter(|ms| *ms > 0);
                table.add_row(vec![
                    ev.name.clone(),
                    ev.id.clone(),
                    ev.local_time_str(),
                    span.map(session_label).unwrap_or_default(),
                ]);
            }
            print!("{}", table.render());
        }
    }
    Ok(())
}
