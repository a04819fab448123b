//! Message catalogs.
//!
//! Two catalogs ship inside the binary; the other languages are JSON packs
//! downloaded into the config directory (see [`packs`]). Lookups fall back to
//! English and finally to the key itself.

pub mod packs;

use crate::config::Config;
use crate::models::{EntryType, YearMonth};
use crate::ui::messages::warning;
use crate::utils::path::sanitize_file_stem;
use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

const EN: &str = include_str!("en.json");
const IT: &str = include_str!("it.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Languages offered by `lang --list`.
pub const LANGUAGES: [Language; 5] = [
    Language { code: "it", name: "Italiano" },
    Language { code: "en", name: "English" },
    Language { code: "de", name: "Deutsch" },
    Language { code: "fr", name: "Français" },
    Language { code: "es", name: "Español" },
];

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|l| l.code.eq_ignore_ascii_case(code))
}

pub fn is_builtin(code: &str) -> bool {
    builtin_source(code).is_some()
}

fn builtin_source(code: &str) -> Option<&'static str> {
    match code {
        "en" => Some(EN),
        "it" => Some(IT),
        _ => None,
    }
}

pub type Messages = HashMap<String, String>;

#[derive(Debug, Clone)]
pub struct Catalog {
    code: String,
    messages: Messages,
    fallback: Messages,
}

impl Catalog {
    /// Catalog for `code`, built-in or installed. Fails if neither.
    pub fn load(code: &str) -> crate::errors::AppResult<Self> {
        let fallback = packs::parse_pack(EN)?;

        let messages = match builtin_source(code) {
            Some(src) => packs::parse_pack(src)?,
            None => packs::read_installed(code)?,
        };

        Ok(Self {
            code: code.to_string(),
            messages,
            fallback,
        })
    }

    /// Catalog of the configured language. A broken or missing pack is
    /// reported and English is used instead.
    pub fn for_config(cfg: &Config) -> Self {
        match Self::load(&cfg.language) {
            Ok(c) => c,
            Err(e) => {
                warning(format!(
                    "Language '{}' unavailable ({e}), using English.",
                    cfg.language
                ));
                Self::english()
            }
        }
    }

    pub fn english() -> Self {
        let messages = packs::parse_pack(EN).unwrap_or_default();
        Self {
            code: DEFAULT_LANGUAGE.to_string(),
            fallback: messages.clone(),
            messages,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.messages
            .get(key)
            .or_else(|| self.fallback.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// Lookup with `{name}` placeholder substitution.
    pub fn tf(&self, key: &str, args: &[(&str, &str)]) -> String {
        args.iter()
            .fold(self.t(key).to_string(), |acc, (name, value)| {
                acc.replace(&format!("{{{name}}}"), value)
            })
    }

    pub fn month_name(&self, month: u32) -> String {
        self.t(&format!("month_{month}")).to_string()
    }

    /// `Marzo 2025`
    pub fn month_year(&self, ym: &YearMonth) -> String {
        format!("{} {}", self.month_name(ym.month), ym.year)
    }

    pub fn entry_type(&self, t: EntryType) -> &str {
        self.t(t.label_key())
    }

    pub fn decimal_separator(&self) -> &str {
        self.t("decimal_separator")
    }

    /// `Riepilogo_Marzo_2025`
    pub fn export_file_stem(&self, ym: &YearMonth) -> String {
        sanitize_file_stem(&format!(
            "{}_{}_{}",
            self.t("export_file_prefix"),
            self.month_name(ym.month),
            ym.year
        ))
    }
}
