use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !ask_confirmation("Clear all attendance records? This cannot be undone.") {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = open_db(cfg)?;

        let removed = {
            let mut ledger = Ledger::load_with_key(&mut pool, &cfg.storage_key);
            ledger.clear()?
        };

        ttlog_soft(
            &pool.conn,
            "clear",
            &cfg.storage_key,
            &format!("Removed {} record(s)", removed),
        );

        success("All records cleared.");
    }

    Ok(())
}
