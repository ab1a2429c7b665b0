// src/export/logic.rs

use crate::core::view;
use crate::errors::AppResult;
use crate::export::csv::to_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::to_json;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::{AttendanceEvent, Query};
use crate::ui::messages::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Render the filtered view of `events` in `format`.
    ///
    /// Fails with `EmptyExport` when the query matches nothing.
    pub fn render(
        events: &[AttendanceEvent],
        query: &Query,
        format: ExportFormat,
    ) -> AppResult<(usize, String)> {
        let filtered = view::filter(events, query);
        let content = match format {
            ExportFormat::Csv => to_csv(&filtered)?,
            ExportFormat::Json => to_json(&filtered)?,
        };
        Ok((filtered.len(), content))
    }

    /// Export the filtered view to `path`.
    ///
    /// Nothing is written, and an existing file is left alone, when the view
    /// is empty. An existing file is only replaced with `force` or after the
    /// user confirms.
    pub fn export(
        events: &[AttendanceEvent],
        query: &Query,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<(usize, PathBuf)> {
        let (rows, content) = Self::render(events, query, format)?;

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        info(format!(
            "Exporting to {}: {}",
            format.label(),
            path.display()
        ));
        fs::write(path, content)?;

        notify_export_success(format.label(), rows, path);
        Ok((rows, path.to_path_buf()))
    }
}
