pub mod colors;
pub mod date;
pub mod fetch;
pub mod formatting;
pub mod opener;
pub mod path;
pub mod period;
pub mod table;
pub mod time;

pub use formatting::format_decimal;
pub use time::format_hm;
