// Date utility functions
// Shared minute arithmetic for the layout and now-indicator passes

use chrono::{DateTime, Datelike, Local, NaiveDate};

pub fn is_same_day(date1: DateTime<Local>, date2: DateTime<Local>) -> bool {
    date1.date_naive() == date2.date_naive()
}

/// Minutes from `day` at `hour:00` (local, naive) to the given instant.
///
/// Negative when the instant precedes the reference point. Computed on the
/// naive local timeline so the percentage math lines up with the rendered
/// hour grid even across DST transitions.
pub fn minutes_from_hour(day: NaiveDate, hour: u32, instant: DateTime<Local>) -> i64 {
    let reference = day
        .and_hms_opt(hour.min(23), 0, 0)
        .map(|dt| {
            if hour > 23 {
                dt + chrono::Duration::hours(i64::from(hour) - 23)
            } else {
                dt
            }
        })
        .unwrap_or_else(|| day.and_hms_opt(0, 0, 0).unwrap());
    (instant.naive_local() - reference).num_minutes()
}

/// Minute-of-day of an instant on the naive local timeline (0..1440).
pub fn minute_of_day(instant: DateTime<Local>) -> i64 {
    let midnight = instant.date_naive().and_hms_opt(0, 0, 0).unwrap();
    (instant.naive_local() - midnight).num_minutes()
}

/// Monday of the week containing `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let days_from_monday = date.weekday().num_days_from_monday();
    date - chrono::Duration::days(i64::from(days_from_monday))
}

/// Whole days between two calendar dates (`later - earlier`).
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}
