//! Downloadable language packs.

use super::{Messages, find_language, is_builtin};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::fetch::{fetch_text, join_source};
use std::fs;
use std::path::PathBuf;

/// A pack missing any of these is rejected.
const REQUIRED_KEYS: [&str; 5] = [
    "summary_title",
    "entry_type_work",
    "entry_type_leave",
    "entry_type_vacation",
    "month_1",
];

pub fn pack_path(code: &str) -> PathBuf {
    Config::lang_dir().join(format!("{code}.json"))
}

pub fn is_installed(code: &str) -> bool {
    is_builtin(code) || pack_path(code).is_file()
}

/// Parse and validate a pack: a flat JSON object of strings.
pub fn parse_pack(text: &str) -> AppResult<Messages> {
    let messages: Messages = serde_json::from_str(text)
        .map_err(|e| AppError::Language(format!("invalid language pack: {e}")))?;

    if let Some(missing) = REQUIRED_KEYS.iter().find(|k| !messages.contains_key(**k)) {
        return Err(AppError::Language(format!(
            "invalid language pack: missing key '{missing}'"
        )));
    }

    Ok(messages)
}

pub fn read_installed(code: &str) -> AppResult<Messages> {
    let path = pack_path(code);
    if !path.is_file() {
        return Err(AppError::UnknownLanguage(code.to_string()));
    }

    let text = fs::read_to_string(&path)?;
    parse_pack(&text)
}

/// Fetch `<base>/<code>.json`, validate it and store it in the lang dir.
pub fn download(code: &str, base: &str) -> AppResult<PathBuf> {
    if find_language(code).is_none() {
        return Err(AppError::UnknownLanguage(code.to_string()));
    }

    let source = join_source(base, &format!("{code}.json"));
    let text = fetch_text(&source)?;
    parse_pack(&text)?;

    let dest = pack_path(code);
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&dest, text)?;

    Ok(dest)
}
