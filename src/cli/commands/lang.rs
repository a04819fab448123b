use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::lang::{LangLogic, LangOutcome};
use crate::errors::AppResult;
use crate::i18n::{Catalog, Language};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREEN, GREY, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lang {
        list,
        set,
        download,
    } = cmd
    {
        if let Some(code) = set {
            let (outcome, language) = LangLogic::set(cfg, code)?;
            report(outcome, language)?;
        }

        if let Some(code) = download {
            let (outcome, language) = LangLogic::download(cfg, code)?;
            report(outcome, language)?;
        }

        if *list || (set.is_none() && download.is_none()) {
            print_list(cfg);
        }
    }

    Ok(())
}

/// Messages come from the catalog of the language now in effect.
fn report(outcome: LangOutcome, language: &Language) -> AppResult<()> {
    let catalog = Catalog::for_config(&Config::load()?);
    let args = [("name", language.name), ("code", language.code)];

    match outcome {
        LangOutcome::AlreadyActive => info(catalog.tf("lang_already_active", &args)),
        LangOutcome::Switched => success(catalog.tf("lang_switched", &args)),
        LangOutcome::Downloaded => success(catalog.tf("lang_downloaded", &args)),
    }
    Ok(())
}

fn print_list(cfg: &Config) {
    let catalog = Catalog::for_config(cfg);
    header(catalog.t("lang_title"));

    for s in LangLogic::statuses(cfg) {
        let state = if s.active {
            format!("{GREEN}{}{RESET}", catalog.t("lang_active"))
        } else if s.installed {
            catalog.t("lang_installed").to_string()
        } else {
            format!("{GREY}{}{RESET}", catalog.t("lang_available"))
        };

        println!("  {:<4} {:<12} {}", s.language.code, s.language.name, state);
    }
}
