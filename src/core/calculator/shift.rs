use chrono::NaiveTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Net length of a shift in minutes.
///
/// An end time earlier than the start means the shift crossed midnight.
/// The break is subtracted afterwards and the result never goes below zero.
pub fn shift_minutes(start: NaiveTime, end: NaiveTime, break_minutes: Option<i32>) -> i64 {
    let mut gross = (end - start).num_minutes();
    if gross < 0 {
        gross += MINUTES_PER_DAY;
    }

    let net = gross - i64::from(break_minutes.unwrap_or(0));
    net.max(0)
}

pub fn hours_decimal(minutes: i64) -> f64 {
    minutes as f64 / 60.0
}
