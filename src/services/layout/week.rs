// Week layout
// Seven Monday-started day columns sharing one multi-day strip across the
// week window. Lane assignment is per column; the strip spans the week.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::view::HourRange;

use super::classify::split_events;
use super::day::{position_lanes, PositionedEvent};
use super::lanes::assign_lanes;
use super::multiday::{multi_day_rows, DayWindow, MultiDayRow};

/// One day column within the week grid.
#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub lane_count: usize,
    pub events: Vec<PositionedEvent>,
}

/// Fully laid-out week.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub window: DayWindow,
    pub hours: HourRange,
    pub days: Vec<DayColumn>,
    pub multi_day: Vec<MultiDayRow>,
}

/// Run the full pipeline for the week containing `date`.
pub fn lay_out_week(events: &[Event], date: NaiveDate, hours: HourRange) -> WeekLayout {
    let window = DayWindow::week_of(date);
    let classified = split_events(events);

    let days = (0..7)
        .map(|offset| {
            let day = window.first + chrono::Duration::days(offset);
            let day_events: Vec<Event> = classified
                .single_day
                .iter()
                .filter(|event| event.occurs_on(day))
                .cloned()
                .collect();

            let groups = assign_lanes(&day_events);
            DayColumn {
                date: day,
                lane_count: groups.len(),
                events: position_lanes(&groups, day, hours),
            }
        })
        .collect();

    WeekLayout {
        window,
        hours,
        days,
        multi_day: multi_day_rows(&classified.multi_day, window),
    }
}
