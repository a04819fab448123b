use super::shift::hours_decimal;
use crate::models::{EntryType, WorkEntry, YearMonth};
use crate::utils::time::to_db_time;
use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Reverse;

/// One report line: an entry with its hours routed into a single bucket.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub id: i64,
    pub date: NaiveDate,
    pub entry_type: EntryType,
    pub task: String,
    pub company: Option<String>,
    pub start: String,
    pub end: String,
    pub break_minutes: i32,
    pub net_minutes: i64,
    pub work_hours: f64,
    pub leave_hours: f64,
    pub vacation_hours: f64,
    pub travel_kms: Option<f64>,
    pub travel_hours: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryTotals {
    pub net_minutes: i64,
    pub work_hours: f64,
    pub leave_hours: f64,
    pub vacation_hours: f64,
    pub travel_kms: f64,
    pub travel_hours: f64,
}

/// Derived, never stored. Shared by every export format.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlySummary {
    pub month: YearMonth,
    pub rows: Vec<SummaryRow>,
    pub totals: SummaryTotals,
}

impl MonthlySummary {
    /// Entries outside `month` are ignored. Rows come out newest first.
    pub fn build(month: YearMonth, entries: &[WorkEntry]) -> Self {
        let mut selected: Vec<&WorkEntry> =
            entries.iter().filter(|e| month.contains(e.date)).collect();
        selected.sort_by_key(|e| Reverse((e.date, e.start_time, e.id)));

        let mut totals = SummaryTotals::default();
        let mut rows = Vec::with_capacity(selected.len());

        for e in selected {
            let row = summary_row(e);

            totals.net_minutes += row.net_minutes;
            totals.work_hours += row.work_hours;
            totals.leave_hours += row.leave_hours;
            totals.vacation_hours += row.vacation_hours;
            totals.travel_kms += row.travel_kms.unwrap_or(0.0);
            totals.travel_hours += row.travel_hours.unwrap_or(0.0);

            rows.push(row);
        }

        Self {
            month,
            rows,
            totals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn summary_row(e: &WorkEntry) -> SummaryRow {
    let net = e.net_minutes();
    let hours = hours_decimal(net);

    let (work, leave, vacation) = match e.entry_type {
        EntryType::Work => (hours, 0.0, 0.0),
        EntryType::Leave => (0.0, hours, 0.0),
        EntryType::Vacation => (0.0, 0.0, hours),
    };

    SummaryRow {
        id: e.id,
        date: e.date,
        entry_type: e.entry_type,
        task: e.task.clone(),
        company: e.company.clone(),
        start: to_db_time(&e.start_time),
        end: to_db_time(&e.end_time),
        break_minutes: e.break_minutes.unwrap_or(0),
        net_minutes: net,
        work_hours: work,
        leave_hours: leave,
        vacation_hours: vacation,
        travel_kms: e.travel_kms,
        travel_hours: e.travel_hours,
    }
}
