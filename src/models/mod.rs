pub mod entry_type;
pub mod month;
pub mod work_entry;

pub use entry_type::EntryType;
pub use month::YearMonth;
pub use work_entry::{EntryForm, WorkEntry};
