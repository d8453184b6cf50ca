// Benchmark for the layout pipeline
// Measures lane assignment and full day layout over growing event counts

use chrono::{Duration, Local, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use studio_calendar::models::event::Event;
use studio_calendar::models::view::HourRange;
use studio_calendar::services::layout::{assign_lanes, lay_out_day};

fn busy_day(count: usize) -> Vec<Event> {
    let opening = Local.with_ymd_and_hms(2026, 3, 9, 8, 0, 0).unwrap();

    (0..count)
        .map(|i| {
            // Staggered starts with varied durations so lanes fill unevenly
            let start = opening + Duration::minutes((i as i64 * 7) % 600);
            let end = start + Duration::minutes(30 + (i as i64 * 11) % 90);
            Event::new(i as i64, format!("Class {}", i), start, end).unwrap()
        })
        .collect()
}

fn bench_lane_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("lane_assignment");

    for count in [10, 100, 1000].iter() {
        let events = busy_day(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| assign_lanes(black_box(&events)));
        });
    }

    group.finish();
}

fn bench_day_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("day_layout");
    let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();

    for count in [10, 100, 1000].iter() {
        let events = busy_day(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| lay_out_day(black_box(&events), date, HourRange::business_hours()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_lane_assignment, bench_day_layout);
criterion_main!(benches);
