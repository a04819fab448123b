/// ANSI color helper utilities for terminal output.
use crate::errors::{AppError, AppResult};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Parse `#RRGGBB` (the leading `#` is optional).
pub fn parse_hex_color(s: &str) -> AppResult<(u8, u8, u8)> {
    let hex = s.trim().trim_start_matches('#');

    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidColor(s.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| AppError::InvalidColor(s.to_string()))
    };

    Ok((channel(0)?, channel(2)?, channel(4)?))
}

/// Canonical `#RRGGBB` spelling.
pub fn to_hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}
