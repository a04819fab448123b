// src/export/logic.rs

use crate::config::Config;
use crate::core::calculator::MonthlySummary;
use crate::core::theme::ThemeLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::load_month;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_writable, write_bytes};
use crate::export::{
    ExportFormat, notify_export_success, render_csv, render_json, render_pdf, render_txt,
    render_xlsx,
};
use crate::i18n::Catalog;
use crate::models::YearMonth;
use crate::ui::messages::{info, warning};
use crate::utils::opener::open_file;
use crate::utils::path::expand_tilde;
use std::env;
use std::path::PathBuf;

/// What the user asked `export` to produce.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub month: YearMonth,
    pub format: ExportFormat,
    pub file: Option<String>,
    pub force: bool,
    pub preview: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Render the monthly summary and write it.
    ///
    /// Returns the written path, or `None` when the month has no entries.
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        catalog: &Catalog,
        req: &ExportRequest,
    ) -> AppResult<Option<PathBuf>> {
        let entries = load_month(&pool.conn, &req.month)?;
        let summary = MonthlySummary::build(req.month, &entries);

        if summary.is_empty() {
            warning(catalog.tf("no_data", &[("month", &catalog.month_year(&req.month))]));
            return Ok(None);
        }

        let bytes = Self::render(&summary, catalog, req.format, cfg)?;
        let path = Self::target_path(cfg, catalog, req);

        if !req.preview {
            ensure_writable(&path, req.force)?;
        }

        info(format!("Exporting to {}: {}", req.format.label(), path.display()));
        write_bytes(&path, &bytes)?;

        ttlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} {} ({} entries)",
                req.format.as_str(),
                req.month,
                summary.rows.len()
            ),
        );

        if req.preview {
            let shown = path.to_string_lossy();
            match open_file(&path) {
                Ok(()) => info(catalog.tf("preview_opened", &[("file", &shown)])),
                Err(_) => warning(catalog.tf("preview_failed", &[("file", &shown)])),
            }
        } else {
            notify_export_success(req.format.label(), &path);
        }

        Ok(Some(path))
    }

    pub fn render(
        summary: &MonthlySummary,
        catalog: &Catalog,
        format: ExportFormat,
        cfg: &Config,
    ) -> AppResult<Vec<u8>> {
        match format {
            ExportFormat::Txt => Ok(render_txt(summary, catalog)),
            ExportFormat::Csv => render_csv(summary, catalog),
            ExportFormat::Pdf => Ok(render_pdf(
                summary,
                catalog,
                ThemeLogic::pdf_font_scale(cfg),
            )),
            ExportFormat::Xlsx => render_xlsx(summary, catalog),
            ExportFormat::Json => render_json(summary),
        }
    }

    /// `--file`, else `<export_dir>/<stem>.<ext>`; previews go to the temp dir.
    fn target_path(cfg: &Config, catalog: &Catalog, req: &ExportRequest) -> PathBuf {
        let file_name = format!(
            "{}.{}",
            catalog.export_file_stem(&req.month),
            req.format.as_str()
        );

        if req.preview {
            return env::temp_dir().join(file_name);
        }

        match req.file.as_deref() {
            Some(f) => expand_tilde(f),
            None => expand_tilde(&cfg.export_dir).join(file_name),
        }
    }
}
