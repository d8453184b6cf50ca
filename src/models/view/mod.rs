// View models
// Explicit view configuration consumed by the layout passes

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Calendar view modes offered by the scheduling screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Day,
    Week,
}

/// Invalid bounded hour range configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HourRangeError {
    #[error("hour range start {start} must be before end {end}")]
    Empty { start: u32, end: u32 },
    #[error("hour {0} is outside 0..=24")]
    OutOfBounds(u32),
}

/// The visible vertical window of a day column, in whole hours.
///
/// Invariant: `0 <= start < end <= 24`. Checked at construction so the
/// geometry functions never have to re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    start: u32,
    end: u32,
}

impl HourRange {
    pub fn new(start: u32, end: u32) -> Result<Self, HourRangeError> {
        if start > 24 {
            return Err(HourRangeError::OutOfBounds(start));
        }
        if end > 24 {
            return Err(HourRangeError::OutOfBounds(end));
        }
        if start >= end {
            return Err(HourRangeError::Empty { start, end });
        }
        Ok(Self { start, end })
    }

    /// The full 24-hour column.
    pub fn full_day() -> Self {
        Self { start: 0, end: 24 }
    }

    /// Front-desk preset: 08:00-18:00.
    pub fn business_hours() -> Self {
        Self { start: 8, end: 18 }
    }

    /// Evening studio preset: 14:00-23:00, when most classes run.
    pub fn studio_evening() -> Self {
        Self { start: 14, end: 23 }
    }

    pub fn start_hour(&self) -> u32 {
        self.start
    }

    pub fn end_hour(&self) -> u32 {
        self.end
    }

    pub fn total_minutes(&self) -> i64 {
        i64::from(self.end - self.start) * 60
    }

    /// Whether a minute-of-day offset falls inside `[start, end)`.
    pub fn contains_minute_of_day(&self, minute_of_day: i64) -> bool {
        minute_of_day >= i64::from(self.start) * 60 && minute_of_day < i64::from(self.end) * 60
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self::full_day()
    }
}

/// Explicit per-render configuration: the selected date, the active view
/// mode and the bounded hour range. Passed into the layout functions rather
/// than read from any ambient context, which keeps them pure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    pub date: NaiveDate,
    pub mode: ViewMode,
    pub hours: HourRange,
}

impl ViewConfig {
    pub fn new(date: NaiveDate, mode: ViewMode, hours: HourRange) -> Self {
        Self { date, mode, hours }
    }
}
