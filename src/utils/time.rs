//! Time utilities: parsing HH:MM, formatting minutes.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// A required shift boundary: missing or blank input is reported as
/// `MissingTimes`, anything unparsable as `InvalidTime`.
pub fn parse_required_time(input: Option<&str>) -> AppResult<NaiveTime> {
    match input.map(str::trim) {
        None | Some("") => Err(AppError::MissingTimes),
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
    }
}

pub fn to_db_time(t: &NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// `H:MM`, e.g. `7:05` for 425 minutes.
pub fn format_hm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}
