use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::models::{Action, NewEvent};
use crate::ui::messages::success;
use crate::utils::clock::SystemClock;

/// Handle `add`, `in` and `out`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let candidate = match cmd {
        Commands::Add { id, name, action } => NewEvent {
            id: id.clone(),
            name: name.clone(),
            action: action.clone(),
        },
        Commands::In { id, name } => NewEvent::new(id.as_str(), name.as_str(), Action::CheckIn),
        Commands::Out { id, name } => NewEvent::new(id.as_str(), name.as_str(), Action::CheckOut),
        _ => return Ok(()),
    };

    let mut pool = open_db(cfg)?;

    let stored = {
        let mut ledger = Ledger::load_with_key(&mut pool, &cfg.storage_key);
        ledger.append(candidate, &SystemClock)?
    };

    ttlog_soft(
        &pool.conn,
        stored.action.as_str(),
        &stored.id,
        &format!("{} at {}", stored.name, stored.local_time_str()),
    );

    let verb = if stored.action.is_in() {
        "Checked In"
    } else {
        "Checked Out"
    };
    success(format!("{} • {}", stored.name, verb));

    Ok(())
}
