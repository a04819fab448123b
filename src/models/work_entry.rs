use super::entry_type::EntryType;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::formatting::parse_decimal;
use crate::utils::time::parse_required_time;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkEntry {
    pub id: i64,
    pub date: NaiveDate,             // ⇔ work_entries.date (TEXT "YYYY-MM-DD")
    pub start_time: NaiveTime,       // ⇔ work_entries.start_time (TEXT "HH:MM")
    pub end_time: NaiveTime,         // ⇔ work_entries.end_time (TEXT "HH:MM")
    pub break_minutes: Option<i32>,  // ⇔ work_entries.break_minutes
    pub task: String,                // ⇔ work_entries.task (TEXT, default '')
    pub entry_type: EntryType,       // ⇔ work_entries.entry_type ('work' | 'leave' | 'vacation')
    pub travel_kms: Option<f64>,     // ⇔ work_entries.travel_kms
    pub travel_hours: Option<f64>,   // ⇔ work_entries.travel_hours
    pub company: Option<String>,     // ⇔ work_entries.company
    pub created_at: String,          // ⇔ work_entries.created_at (TEXT, ISO8601)
}

impl WorkEntry {
    pub fn new(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Self {
        Self {
            id: 0,
            date,
            start_time,
            end_time,
            break_minutes: None,
            task: String::new(),
            entry_type: EntryType::Work,
            travel_kms: None,
            travel_hours: None,
            company: None,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Drop the fields a vacation entry cannot carry.
    pub fn normalize(&mut self) {
        if self.entry_type.clears_details() {
            self.break_minutes = None;
            self.task.clear();
            self.travel_kms = None;
            self.travel_hours = None;
            self.company = None;
        }

        if self.company.as_deref().is_some_and(|c| c.trim().is_empty()) {
            self.company = None;
        }
    }

    /// Net shift length in minutes.
    pub fn net_minutes(&self) -> i64 {
        crate::core::calculator::shift_minutes(self.start_time, self.end_time, self.break_minutes)
    }
}

/// Raw user input for `add` / `edit`.
///
/// Every field is optional here: `build` enforces what a new entry needs,
/// `apply_to` only overlays what was given.
#[derive(Debug, Default, Clone)]
pub struct EntryForm {
    pub date: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub break_minutes: Option<i32>,
    pub task: Option<String>,
    pub entry_type: Option<String>,
    pub travel_kms: Option<String>,
    pub travel_hours: Option<String>,
    pub company: Option<String>,
}

impl EntryForm {
    /// Validate the form as a new entry. Start and end are mandatory.
    pub fn build(&self, today: NaiveDate) -> AppResult<WorkEntry> {
        let start = parse_required_time(self.start.as_deref())?;
        let end = parse_required_time(self.end.as_deref())?;

        let day = match &self.date {
            Some(d) => date::parse_date_arg(d)?,
            None => today,
        };

        let mut entry = WorkEntry::new(day, start, end);
        self.overlay_details(&mut entry)?;
        entry.normalize();
        Ok(entry)
    }

    /// Overlay the given fields on an existing entry and revalidate it.
    pub fn apply_to(&self, entry: &mut WorkEntry) -> AppResult<()> {
        if let Some(d) = &self.date {
            entry.date = date::parse_date_arg(d)?;
        }
        if let Some(s) = &self.start {
            entry.start_time = parse_required_time(Some(s))?;
        }
        if let Some(e) = &self.end {
            entry.end_time = parse_required_time(Some(e))?;
        }

        self.overlay_details(entry)?;
        entry.normalize();
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.start.is_none()
            && self.end.is_none()
            && self.break_minutes.is_none()
            && self.task.is_none()
            && self.entry_type.is_none()
            && self.travel_kms.is_none()
            && self.travel_hours.is_none()
            && self.company.is_none()
    }

    fn overlay_details(&self, entry: &mut WorkEntry) -> AppResult<()> {
        if let Some(t) = &self.entry_type {
            entry.entry_type =
                EntryType::from_code(t).ok_or_else(|| AppError::InvalidEntryType(t.clone()))?;
        }

        if let Some(b) = self.break_minutes {
            if b < 0 {
                return Err(AppError::InvalidNumber(format!("break {b}")));
            }
            entry.break_minutes = Some(b);
        }

        if let Some(task) = &self.task {
            entry.task = task.trim().to_string();
        }

        if let Some(k) = &self.travel_kms {
            entry.travel_kms = optional_decimal(k)?;
        }

        if let Some(h) = &self.travel_hours {
            entry.travel_hours = optional_decimal(h)?;
        }

        if let Some(c) = &self.company {
            let c = c.trim();
            entry.company = (!c.is_empty()).then(|| c.to_string());
        }

        Ok(())
    }
}

/// Blank input clears the field.
fn optional_decimal(s: &str) -> AppResult<Option<f64>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_decimal(s).map(Some)
    }
}
