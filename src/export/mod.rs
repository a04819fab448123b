// src/export/mod.rs

mod csv_export;
mod fs_utils;
mod json;
pub mod logic;
mod pdf;
mod pdf_export;
mod txt;
mod xlsx;

pub use csv_export::render_csv;
pub use fs_utils::{SAVED_EXTENSIONS, list_saved_files};
pub use json::render_json;
pub use logic::{ExportLogic, ExportRequest};
pub use pdf_export::render_pdf;
pub use txt::render_txt;
pub use xlsx::render_xlsx;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Txt,
    Csv,
    Pdf,
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "TXT",
            ExportFormat::Csv => "CSV",
            ExportFormat::Pdf => "PDF",
            ExportFormat::Xlsx => "XLSX",
            ExportFormat::Json => "JSON",
        }
    }
}
