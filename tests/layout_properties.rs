// Property-based tests for the layout invariants
// Random event sets must uphold the classification, lane and geometry
// guarantees the rendering components assume.

mod fixtures;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use studio_calendar::models::event::Event;
use studio_calendar::models::view::HourRange;
use studio_calendar::services::layout::{assign_lanes, lay_out_day, split_events};

use fixtures::at;

const EPSILON: f32 = 1e-3;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 9).unwrap()
}

/// Random event on the fixture Monday; duration may cross midnight so the
/// classifier sees both kinds.
fn arb_event(id: i64, start_minute: i64, duration_minutes: i64) -> Event {
    let start = at(9, 0, 0) + Duration::minutes(start_minute);
    Event::new(id, format!("Class {}", id), start, start + Duration::minutes(duration_minutes))
        .unwrap()
}

/// Random single-day event: end clamped to 23:59 on the same date.
fn arb_single_day(id: i64, start_minute: i64, duration_minutes: i64) -> Event {
    let duration = duration_minutes.min(1439 - start_minute);
    arb_event(id, start_minute, duration)
}

prop_compose! {
    fn event_set(max_len: usize)
        (specs in prop::collection::vec((0i64..1440, 0i64..600), 0..max_len))
        -> Vec<Event>
    {
        specs
            .into_iter()
            .enumerate()
            .map(|(id, (start, dur))| arb_event(id as i64, start, dur))
            .collect()
    }
}

prop_compose! {
    fn single_day_set(max_len: usize)
        (specs in prop::collection::vec((0i64..1380, 0i64..300), 0..max_len))
        -> Vec<Event>
    {
        specs
            .into_iter()
            .enumerate()
            .map(|(id, (start, dur))| arb_single_day(id as i64, start, dur))
            .collect()
    }
}

proptest! {
    /// Classification never drops or duplicates a valid event, and the two
    /// outputs are disjoint.
    #[test]
    fn prop_classification_is_a_partition(events in event_set(24)) {
        let classified = split_events(&events);

        prop_assert_eq!(
            classified.single_day.len() + classified.multi_day.len(),
            events.len()
        );

        let mut seen: Vec<i64> = classified
            .single_day
            .iter()
            .chain(classified.multi_day.iter())
            .map(|e| e.id)
            .collect();
        seen.sort_unstable();
        let mut expected: Vec<i64> = events.iter().map(|e| e.id).collect();
        expected.sort_unstable();
        prop_assert_eq!(seen, expected);

        for event in &classified.single_day {
            prop_assert!(!event.is_multi_day());
        }
        for event in &classified.multi_day {
            prop_assert!(event.is_multi_day());
        }
    }

    /// No two events in the same lane overlap in time.
    #[test]
    fn prop_lanes_never_overlap(events in single_day_set(24)) {
        for group in assign_lanes(&events) {
            for (i, a) in group.events.iter().enumerate() {
                for b in group.events.iter().skip(i + 1) {
                    prop_assert!(
                        a.end <= b.start || b.end <= a.start,
                        "events {} and {} share a lane but overlap",
                        a.id,
                        b.id
                    );
                }
            }
        }
    }

    /// Every lane-assigned event appears exactly once across the groups.
    #[test]
    fn prop_lanes_are_lossless(events in single_day_set(24)) {
        let groups = assign_lanes(&events);
        let total: usize = groups.iter().map(|g| g.events.len()).sum();
        prop_assert_eq!(total, events.len());
    }

    /// All rectangles stay within the horizontal bounds of the column.
    #[test]
    fn prop_geometry_is_contained(events in single_day_set(24)) {
        let layout = lay_out_day(&events, day(), HourRange::full_day());

        for positioned in &layout.events {
            let g = positioned.geometry;
            prop_assert!(g.left_pct >= -EPSILON);
            prop_assert!(g.left_pct + g.width_pct <= 100.0 + EPSILON);
            prop_assert!(g.top_pct >= -EPSILON);
            prop_assert!(g.width_pct > 0.0);
        }
    }

    /// An event overlapping nothing always renders at full width from the
    /// left edge, whatever lane the greedy pass gave it.
    #[test]
    fn prop_isolated_events_are_widened(events in single_day_set(16)) {
        let layout = lay_out_day(&events, day(), HourRange::full_day());

        for positioned in &layout.events {
            let isolated = !layout
                .events
                .iter()
                .filter(|other| other.event.id != positioned.event.id)
                .any(|other| positioned.event.overlaps(&other.event));

            if isolated {
                prop_assert!((positioned.geometry.width_pct - 100.0).abs() < EPSILON);
                prop_assert!(positioned.geometry.left_pct.abs() < EPSILON);
            }
        }
    }

    /// Re-running the pipeline on the same snapshot yields identical output.
    #[test]
    fn prop_pipeline_is_idempotent(events in event_set(24)) {
        let first = lay_out_day(&events, day(), HourRange::full_day());
        let second = lay_out_day(&events, day(), HourRange::full_day());
        prop_assert_eq!(first, second);
    }
}
