//! `--period` selectors for the list view.

use crate::errors::{AppError, AppResult};
use crate::models::YearMonth;
use chrono::NaiveDate;

/// Inclusive date bounds of a period expression.
///
/// Supported:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `A:B` where both sides use the same form
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{p} (start and end must have the same format)"
            )));
        }

        let (from, _) = bounds(start, p)?;
        let (_, to) = bounds(end, p)?;

        if from > to {
            return Err(AppError::InvalidPeriod(format!("{p} (start after end)")));
        }
        return Ok((from, to));
    }

    bounds(p, p)
}

fn bounds(part: &str, whole: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(whole.to_string());

    match part.len() {
        4 => {
            let y: i32 = part.parse().map_err(|_| invalid())?;
            let from = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let to = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((from, to))
        }
        7 => {
            let ym = YearMonth::parse(part).map_err(|_| invalid())?;
            Ok((ym.first_day(), ym.last_day()))
        }
        10 => {
            let d = NaiveDate::parse_from_str(part, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
