// Layout engine
// Pure, stateless passes that turn a snapshot of events into renderable
// geometry: classification -> lane assignment -> geometry, plus the
// multi-day strip. Everything here is recomputed from scratch per render.

pub mod classify;
pub mod day;
pub mod geometry;
pub mod lanes;
pub mod multiday;
pub mod week;

pub use classify::{split_events, ClassifiedEvents};
pub use day::{lay_out_day, DayLayout, PositionedEvent};
pub use geometry::EventGeometry;
pub use lanes::{assign_day_lanes, assign_lanes, LaneGroup};
pub use multiday::{multi_day_rows, DayWindow, MultiDayRow, MultiDaySpan};
pub use week::{lay_out_week, DayColumn, WeekLayout};

use crate::models::event::Event;
use crate::models::view::{ViewConfig, ViewMode};

/// Layout for whichever view mode the configuration selects.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewLayout {
    Day(DayLayout),
    Week(WeekLayout),
}

/// Run the full pipeline for the configured view.
pub fn lay_out(events: &[Event], config: &ViewConfig) -> ViewLayout {
    match config.mode {
        ViewMode::Day => ViewLayout::Day(lay_out_day(events, config.date, config.hours)),
        ViewMode::Week => ViewLayout::Week(lay_out_week(events, config.date, config.hours)),
    }
}
