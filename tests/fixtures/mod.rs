// Test fixtures - reusable test data
// Shared event constructors for the integration and property suites

use chrono::{DateTime, Local, NaiveDate, TimeZone};
use studio_calendar::models::event::{ColorTag, Event};

/// The Monday used throughout the suites.
pub fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
}

pub fn at(day: u32, hour: u32, minute: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 3, day, hour, minute, 0).unwrap()
}

/// Single-day class on the fixture Monday.
pub fn class(id: i64, start_h: u32, start_m: u32, end_h: u32, end_m: u32) -> Event {
    Event::builder()
        .id(id)
        .name(format!("Class {}", id))
        .color(ColorTag::Azure)
        .start(at(9, start_h, start_m))
        .end(at(9, end_h, end_m))
        .build()
        .unwrap()
}

/// Event spanning whole calendar days within the fixture week.
pub fn spanning(id: i64, start_day: u32, end_day: u32) -> Event {
    Event::builder()
        .id(id)
        .name(format!("Workshop {}", id))
        .color(ColorTag::Violet)
        .start(at(start_day, 10, 0))
        .end(at(end_day, 16, 0))
        .build()
        .unwrap()
}
