//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Ledger rejections
    // ---------------------------
    #[error("Name and ID are required.")]
    Validation,

    #[error("Already {0}.")]
    DuplicateState(&'static str),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Nothing to export.")]
    EmptyExport,

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for the rejections a user can fix by changing the input.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            AppError::Validation | AppError::DuplicateState(_) | AppError::EmptyExport
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
