// Day layout
// Composes classification, lane assignment and geometry for one day column
// plus the day's multi-day strip.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::view::HourRange;

use super::classify::split_events;
use super::geometry::{event_geometry, EventGeometry};
use super::lanes::assign_lanes;
use super::multiday::{multi_day_rows, DayWindow, MultiDayRow};

/// An event with its computed rectangle and the lane it was assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedEvent {
    pub event: Event,
    pub lane: usize,
    pub geometry: EventGeometry,
}

/// Fully laid-out day: the hourly column's positioned events and the
/// multi-day strip rows rendered above it.
#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub hours: HourRange,
    pub lane_count: usize,
    pub events: Vec<PositionedEvent>,
    pub multi_day: Vec<MultiDayRow>,
}

/// Run the full pipeline for a single day window.
///
/// Single-day events on other dates are ignored; multi-day events touching
/// the date appear in the strip, clamped to it.
pub fn lay_out_day(events: &[Event], date: NaiveDate, hours: HourRange) -> DayLayout {
    let classified = split_events(events);

    let day_events: Vec<Event> = classified
        .single_day
        .into_iter()
        .filter(|event| event.occurs_on(date))
        .collect();

    let groups = assign_lanes(&day_events);
    let lane_count = groups.len();

    let positioned = position_lanes(&groups, date, hours);

    log::debug!(
        "laid out {} on {} lane(s), {} multi-day event(s) in strip",
        date,
        lane_count,
        classified.multi_day.len()
    );

    DayLayout {
        date,
        hours,
        lane_count,
        events: positioned,
        multi_day: multi_day_rows(&classified.multi_day, DayWindow::single(date)),
    }
}

/// Compute rectangles for lane-assigned events, applying the isolation
/// widening override.
///
/// The override re-checks overlap pairwise across every event of the day,
/// not just within the event's own lane: greedy packing can leave an event
/// in a narrow lane even though nothing actually conflicts with it, and
/// such an event takes the full column width instead.
pub(super) fn position_lanes(
    groups: &[super::lanes::LaneGroup],
    date: NaiveDate,
    hours: HourRange,
) -> Vec<PositionedEvent> {
    let all_events: Vec<&Event> = groups.iter().flat_map(|g| g.events.iter()).collect();
    let lane_count = groups.len();

    let mut positioned = Vec::with_capacity(all_events.len());

    for (lane, group) in groups.iter().enumerate() {
        for event in &group.events {
            let mut geometry = event_geometry(event, date, lane, lane_count, hours);

            let isolated = !all_events
                .iter()
                .any(|other| !std::ptr::eq(*other, event) && event.overlaps(other));
            if isolated {
                geometry = geometry.widened();
            }

            positioned.push(PositionedEvent {
                event: event.clone(),
                lane,
                geometry,
            });
        }
    }

    positioned
}
