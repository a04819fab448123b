use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database to `dest_file`, or with `compress` write it into
    /// `<dest_file stem>.zip` instead. Returns the written file, or `None` if
    /// the user declined to overwrite an existing one.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(AppError::from(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // with --compress only the archive is written, never `dest` itself
        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest
        };

        if target.exists()
            && !force
            && !ask_confirmation(&format!("The file '{}' already exists. Overwrite it?", target.display()))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        if fs::canonicalize(&target).ok() == fs::canonicalize(src).ok() {
            return Err(AppError::Other(format!(
                "Backup target is the database itself: {}",
                target.display()
            )));
        }

        let final_path = if compress {
            compress_backup(src, &target)?;
            success(format!("Backup created and compressed: {}", target.display()));
            target
        } else {
            fs::copy(src, &target)?;
            success(format!("Backup created: {}", target.display()));
            target
        };

        let pool = DbPool::new(&cfg.database)?;
        ttlog_quiet(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Stream the database into a single-entry zip archive at `zip_path`.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "workhours.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options).map_err(io::Error::other)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(io::Error::other)?;

    Ok(())
}
