use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::UpdateLogic;
use crate::errors::{AppError, AppResult};
use crate::i18n::Catalog;
use crate::ui::messages::{info, success, warning};
use crate::utils::opener::open_file;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update { check } = cmd {
        let catalog = Catalog::for_config(cfg);

        let source = cfg
            .update_url
            .as_deref()
            .ok_or_else(|| AppError::Config("update_url is not set in the configuration".into()))?;

        info(catalog.t("update_checking"));
        let status = UpdateLogic::check(source)?;

        let current = status.current.to_string();
        let latest = status.latest.to_string();

        if !status.is_update_available() {
            success(catalog.tf("up_to_date", &[("current", &current)]));
            return Ok(());
        }

        warning(catalog.tf(
            "update_available",
            &[("latest", &latest), ("current", &current)],
        ));

        if let Some(notes) = status.notes.as_deref().filter(|n| !n.trim().is_empty()) {
            println!("{}", catalog.tf("update_notes", &[("notes", notes.trim())]));
        }

        if let Some(url) = &status.url {
            println!("{}", catalog.tf("update_download", &[("url", url)]));
            if !*check && open_file(Path::new(url)).is_err() {
                warning(catalog.tf("preview_failed", &[("file", url)]));
            }
        }
    }

    Ok(())
}
