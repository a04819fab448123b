//! Unified application error type.
//! All modules (db, core, export, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid entry type: {0}")]
    InvalidEntryType(String),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Invalid month: {0} (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    // ---------------------------
    // Entry errors
    // ---------------------------
    #[error("Start and end time are required")]
    MissingTimes,

    #[error("Entry #{0} not found")]
    EntryNotFound(i64),

    // ---------------------------
    // Config / theme errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    #[error("Invalid color: {0} (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("Unknown background gradient: {0} (expected gradient_1 .. gradient_20)")]
    InvalidGradient(String),

    // ---------------------------
    // Language packs / network
    // ---------------------------
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Language pack error: {0}")]
    Language(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Update check failed: {0}")]
    Update(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Import error: {0}")]
    Import(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
