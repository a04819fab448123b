// src/export/json.rs

use crate::core::calculator::MonthlySummary;
use crate::errors::{AppError, AppResult};

/// Pretty-printed `MonthlySummary`.
pub fn render_json(summary: &MonthlySummary) -> AppResult<Vec<u8>> {
    serde_json::to_vec_pretty(summary).map_err(|e| AppError::Export(e.to_string()))
}
