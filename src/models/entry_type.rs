use serde::{Deserialize, Serialize};

/// Category of a work entry.
///
/// Controls which fields the entry carries (vacation has no break, task,
/// travel or company) and which bucket its hours go to in a monthly summary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    #[default]
    Work,
    Leave,
    Vacation,
}

impl EntryType {
    pub const ALL: [EntryType; 3] = [EntryType::Work, EntryType::Leave, EntryType::Vacation];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryType::Work => "work",
            EntryType::Leave => "leave",
            EntryType::Vacation => "vacation",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "work" => Some(EntryType::Work),
            "leave" => Some(EntryType::Leave),
            "vacation" => Some(EntryType::Vacation),
            _ => None,
        }
    }

    /// Lenient parser for user input and imported rows.
    ///
    /// Accepts the DB codes, their initials and the display labels used by the
    /// built-in catalogs (Italian labels come from older mobile exports).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "work" | "w" | "lavoro" => Some(EntryType::Work),
            "leave" | "l" | "permesso" => Some(EntryType::Leave),
            "vacation" | "v" | "ferie" | "holiday" => Some(EntryType::Vacation),
            _ => None,
        }
    }

    /// Catalog key of the localized label.
    pub fn label_key(&self) -> &'static str {
        match self {
            EntryType::Work => "entry_type_work",
            EntryType::Leave => "entry_type_leave",
            EntryType::Vacation => "entry_type_vacation",
        }
    }

    /// Vacation days only carry the shift times.
    pub fn clears_details(&self) -> bool {
        matches!(self, EntryType::Vacation)
    }
}
