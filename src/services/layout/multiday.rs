// Multi-day strip layout
// Events spanning two or more calendar days render in a horizontal strip
// above the hourly grid, one row per lane of concurrently active events.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::utils::date::days_between;

use super::lanes::assign_day_lanes;

/// The visible span of calendar days, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DayWindow {
    /// A single-day window.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            first: date,
            last: date,
        }
    }

    /// The Monday-started week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        let first = crate::utils::date::week_start(date);
        Self {
            first,
            last: first + chrono::Duration::days(6),
        }
    }

    pub fn day_count(&self) -> usize {
        days_between(self.first, self.last).max(0) as usize + 1
    }

    fn intersects(&self, event: &Event) -> bool {
        event.start.date_naive() <= self.last && event.end.date_naive() >= self.first
    }
}

/// One multi-day event clamped to the visible window.
///
/// `start_offset` and `span_days` are in whole days relative to the window;
/// the continuation flags tell the renderer the event extends beyond the
/// window edge, since the clamped span no longer shows the full extent.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiDaySpan {
    pub event: Event,
    pub start_offset: usize,
    pub span_days: usize,
    pub continues_before: bool,
    pub continues_after: bool,
}

/// One row of the strip: spans that do not share any calendar day.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiDayRow {
    pub spans: Vec<MultiDaySpan>,
}

/// Lay out multi-day events for the window, one row per day-granularity
/// lane. Events with no day inside the window are dropped; all others are
/// clamped to the window boundaries.
pub fn multi_day_rows(events: &[Event], window: DayWindow) -> Vec<MultiDayRow> {
    let visible: Vec<Event> = events
        .iter()
        .filter(|event| window.intersects(event))
        .cloned()
        .collect();

    assign_day_lanes(&visible)
        .into_iter()
        .map(|group| MultiDayRow {
            spans: group
                .events
                .into_iter()
                .map(|event| clamp_to_window(event, window))
                .collect(),
        })
        .collect()
}

fn clamp_to_window(event: Event, window: DayWindow) -> MultiDaySpan {
    let start_date = event.start.date_naive();
    let end_date = event.end.date_naive();

    let continues_before = start_date < window.first;
    let continues_after = end_date > window.last;

    let visible_start = start_date.max(window.first);
    let visible_end = end_date.min(window.last);

    let start_offset = days_between(window.first, visible_start).max(0) as usize;
    let span_days = days_between(visible_start, visible_end).max(0) as usize + 1;

    MultiDaySpan {
        event,
        start_offset,
        span_days,
        continues_before,
        continues_after,
    }
}
