//! Formatting utilities used for CLI and export outputs.

use crate::errors::{AppError, AppResult};

/// Two decimals with the catalog's decimal separator.
pub fn format_decimal(value: f64, separator: &str) -> String {
    let s = format!("{:.2}", value);
    if separator == "." {
        s
    } else {
        s.replace('.', separator)
    }
}

/// Same as [`format_decimal`] but blank for zero or negative values.
pub fn format_positive(value: f64, separator: &str) -> String {
    if value > 0.0 {
        format_decimal(value, separator)
    } else {
        String::new()
    }
}

/// Accepts both `2.5` and `2,5`.
pub fn parse_decimal(s: &str) -> AppResult<f64> {
    let normalized = s.trim().replace(',', ".");
    let v: f64 = normalized
        .parse()
        .map_err(|_| AppError::InvalidNumber(s.to_string()))?;

    if !v.is_finite() || v < 0.0 {
        return Err(AppError::InvalidNumber(s.to_string()));
    }

    Ok(v)
}

/// Trailing zeros trimmed, used where the raw value is echoed back (`12.5 km`).
pub fn format_plain(value: f64) -> String {
    let s = format!("{:.2}", value);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
