// Geometry computation
// Converts a lane-assigned event into a percentage rectangle within a
// day's bounded-hour column. Percentages keep the output independent of
// pixel density; the renderer owns the translation to screen units.

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::view::HourRange;
use crate::utils::date::minutes_from_hour;

/// Percentage-based rectangle for one event block.
///
/// `top_pct + height_pct` may exceed 100 for events running past the
/// visible range's end; the rendering container clips them rather than the
/// geometry truncating them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventGeometry {
    pub top_pct: f32,
    pub height_pct: f32,
    pub left_pct: f32,
    pub width_pct: f32,
}

impl EventGeometry {
    /// Widen to the full column, used when an event overlaps nothing else
    /// in its day.
    pub fn widened(self) -> Self {
        Self {
            left_pct: 0.0,
            width_pct: 100.0,
            ..self
        }
    }
}

/// Compute the rectangle for an event within one day column.
///
/// Vertical placement is the event's minute offset from the range start as
/// a share of the range's total minutes, clamped so events starting before
/// the visible window render from the top. Height is the duration scaled
/// the same way, measured from the clamped start so the bottom edge stays
/// at the true end time. Horizontal placement divides the column evenly
/// between the day's lanes.
pub fn event_geometry(
    event: &Event,
    day: NaiveDate,
    group_index: usize,
    group_count: usize,
    range: HourRange,
) -> EventGeometry {
    let total_minutes = range.total_minutes() as f32;

    let start_offset = minutes_from_hour(day, range.start_hour(), event.start);
    let end_offset = minutes_from_hour(day, range.start_hour(), event.end);

    let clamped_start = start_offset.max(0);
    let visible_minutes = (end_offset - clamped_start).max(0);

    let top_pct = (clamped_start as f32 / total_minutes) * 100.0;
    let height_pct = (visible_minutes as f32 / total_minutes) * 100.0;

    let lanes = group_count.max(1);
    let width_pct = 100.0 / lanes as f32;
    let left_pct = group_index as f32 * width_pct;

    EventGeometry {
        top_pct,
        height_pct,
        left_pct,
        width_pct,
    }
}
