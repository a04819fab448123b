use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::list_saved_files;
use crate::i18n::Catalog;
use crate::ui::messages::{header, info, success};
use crate::utils::opener::open_file;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Viewer for saved summaries.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Files { open } = cmd {
        let catalog = Catalog::for_config(cfg);
        let dir = expand_tilde(&cfg.export_dir);
        let dir_label = dir.display().to_string();
        let files = list_saved_files(&dir)?;

        if let Some(sel) = open {
            let path = select(&files, sel)?;
            open_file(&path)?;
            success(catalog.tf("file_opened", &[("file", &path.display().to_string())]));
            return Ok(());
        }

        if files.is_empty() {
            info(catalog.tf("no_files", &[("dir", &dir_label)]));
            return Ok(());
        }

        header(catalog.tf("files_title", &[("dir", &dir_label)]));
        for (i, f) in files.iter().enumerate() {
            let name = f
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            let kb = fs::metadata(f).map(|m| m.len() as f64 / 1024.0).unwrap_or(0.0);
            println!("{:>3}. {:<40} {:>8.1} KB", i + 1, name, kb);
        }
    }

    Ok(())
}

/// A 1-based index into `files`, or a file name.
fn select(files: &[PathBuf], sel: &str) -> AppResult<PathBuf> {
    if let Ok(n) = sel.trim().parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| files.get(i))
            .cloned()
            .ok_or_else(|| AppError::Other(format!("No saved file number {n}")));
    }

    files
        .iter()
        .find(|f| f.file_name().is_some_and(|n| n.to_string_lossy() == sel))
        .cloned()
        .ok_or_else(|| AppError::Other(format!("No saved file named '{sel}'")))
}
