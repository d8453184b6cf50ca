// Lane assignment
// Greedy first-fit packing of overlapping events into visually distinct
// lanes. Deliberately not an optimal interval colouring: the first lane
// whose last event has ended takes the candidate.

use crate::models::event::Event;

/// One horizontal lane: an ordered list of events whose time intervals do
/// not overlap each other.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaneGroup {
    pub events: Vec<Event>,
}

/// Assign a day's single-day events to lanes at minute granularity.
///
/// Events are sorted by start time with a stable sort, so ties keep their
/// input order. Each event lands in the first lane whose last-placed event
/// ends at or before the candidate's start; the `<=` comparison lets an
/// event share a lane with a predecessor that ends exactly when it starts,
/// including zero-duration predecessors at the same instant.
pub fn assign_lanes(events: &[Event]) -> Vec<LaneGroup> {
    assign_with(events, |last, candidate| last.end <= candidate.start)
}

/// Assign multi-day events to lanes at day granularity.
///
/// Two multi-day events conflict when their date ranges share at least one
/// calendar day, so a lane is reusable only once the previous event's end
/// date is strictly before the candidate's start date.
pub fn assign_day_lanes(events: &[Event]) -> Vec<LaneGroup> {
    assign_with(events, |last, candidate| !last.overlaps_days(candidate))
}

fn assign_with<F>(events: &[Event], fits_after: F) -> Vec<LaneGroup>
where
    F: Fn(&Event, &Event) -> bool,
{
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.start);

    let mut groups: Vec<LaneGroup> = Vec::new();

    for event in sorted {
        let slot = groups.iter_mut().find(|group| {
            group
                .events
                .last()
                .is_some_and(|last| fits_after(last, &event))
        });

        match slot {
            Some(group) => group.events.push(event),
            None => groups.push(LaneGroup {
                events: vec![event],
            }),
        }
    }

    groups
}
