pub mod shift;
pub mod summary;

pub use shift::{hours_decimal, shift_minutes};
pub use summary::{MonthlySummary, SummaryRow, SummaryTotals};
