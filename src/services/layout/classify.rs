// Event classification
// Splits the visible event set into single-day and multi-day passes.

use crate::models::event::Event;

/// Disjoint partition of the visible events.
///
/// Union of the two lists is exactly the valid input set; no event is
/// dropped or duplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassifiedEvents {
    pub single_day: Vec<Event>,
    pub multi_day: Vec<Event>,
}

/// Partition events by whether start and end share a local calendar date.
///
/// Events that fail their own temporal validation (`start > end`) are
/// excluded with a logged diagnostic rather than aborting the pass.
pub fn split_events(events: &[Event]) -> ClassifiedEvents {
    let mut classified = ClassifiedEvents::default();

    for event in events {
        if let Err(err) = event.validate() {
            log::warn!("excluding event from layout: {}", err);
            continue;
        }

        if event.is_multi_day() {
            classified.multi_day.push(event.clone());
        } else {
            classified.single_day.push(event.clone());
        }
    }

    classified
}
