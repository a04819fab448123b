use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::i18n::{Catalog, find_language};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Info) {
        let catalog = Catalog::for_config(cfg);
        let language = find_language(&cfg.language)
            .map(|l| format!("{} ({})", l.name, l.code))
            .unwrap_or_else(|| cfg.language.clone());

        header(format!("workhours {}", env!("CARGO_PKG_VERSION")));

        let rows = [
            ("info_version", env!("CARGO_PKG_VERSION").to_string()),
            ("info_config", Config::config_file().display().to_string()),
            ("info_database", cfg.database.clone()),
            ("info_export_dir", cfg.export_dir.clone()),
            ("info_language", language),
        ];

        for (key, value) in rows {
            println!("{CYAN}{:<14}{RESET} {}", catalog.t(key), value);
        }
    }

    Ok(())
}
