use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::load_events;
use crate::db::log::ttlog_soft;
use crate::errors::AppResult;
use crate::export::{ExportLogic, default_file_name};
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        filters,
        format,
        file,
        force,
    } = cmd
    {
        let query = filters.to_query(cfg)?;

        let path = match file {
            Some(f) => expand_tilde(f),
            None => cfg
                .export_path()
                .join(default_file_name(date::today(), *format)),
        };

        let pool = open_db(cfg)?;
        let events = load_events(&pool, &cfg.storage_key);

        let (rows, written) = ExportLogic::export(&events, &query, *format, &path, *force)?;

        ttlog_soft(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} row(s) to {}", rows, written.display()),
        );
    }
    Ok(())
}
