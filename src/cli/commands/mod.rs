pub mod add;
pub mod clear;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database, running pending migrations.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open(&cfg.database_path())
}
