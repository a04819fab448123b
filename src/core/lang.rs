use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::i18n::packs::{download, is_installed};
use crate::i18n::{LANGUAGES, Language, find_language};

/// What `set`/`download` ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangOutcome {
    AlreadyActive,
    Switched,
    Downloaded,
}

#[derive(Debug, Clone)]
pub struct LanguageStatus {
    pub language: &'static Language,
    pub installed: bool,
    pub active: bool,
}

pub struct LangLogic;

impl LangLogic {
    pub fn statuses(cfg: &Config) -> Vec<LanguageStatus> {
        LANGUAGES
            .iter()
            .map(|language| LanguageStatus {
                language,
                installed: is_installed(language.code),
                active: language.code == cfg.language,
            })
            .collect()
    }

    fn lookup(code: &str) -> AppResult<&'static Language> {
        find_language(code).ok_or_else(|| AppError::UnknownLanguage(code.to_string()))
    }

    /// Switch to an installed language.
    pub fn set(cfg: &Config, code: &str) -> AppResult<(LangOutcome, &'static Language)> {
        let language = Self::lookup(code)?;

        if cfg.language == language.code {
            return Ok((LangOutcome::AlreadyActive, language));
        }

        if !is_installed(language.code) {
            return Err(AppError::Language(format!(
                "{} is not installed, run `lang --download {}` first",
                language.name, language.code
            )));
        }

        Config::update(|c| {
            c.language = language.code.to_string();
            Ok(())
        })?;

        Ok((LangOutcome::Switched, language))
    }

    /// Install a pack from `lang_pack_url`, then switch to it.
    pub fn download(cfg: &Config, code: &str) -> AppResult<(LangOutcome, &'static Language)> {
        let language = Self::lookup(code)?;

        if is_installed(language.code) && cfg.language == language.code {
            return Ok((LangOutcome::AlreadyActive, language));
        }

        if !crate::i18n::is_builtin(language.code) {
            let base = cfg.lang_pack_url.as_deref().ok_or_else(|| {
                AppError::Config("lang_pack_url is not set in the configuration".into())
            })?;
            download(language.code, base)?;
        }

        Config::update(|c| {
            c.language = language.code.to_string();
            Ok(())
        })?;

        Ok((LangOutcome::Downloaded, language))
    }
}
