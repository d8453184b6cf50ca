// Live time indicator
// Pure position math for the "now" line plus the recurring ticker that
// drives it. The current instant is always injected as a parameter, so the
// geometry stays testable with fixed clocks.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate};

use crate::models::view::HourRange;
use crate::utils::date::{minute_of_day, minutes_from_hour};

/// Re-evaluation period for the indicator.
pub const TICK_PERIOD: Duration = Duration::from_secs(60);

/// Position of the "now" line within a day column's bounded hour range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NowIndicator {
    /// The instant falls on the column's date and inside `[start, end)`.
    Visible { top_pct: f32 },
    Hidden,
}

/// Compute the indicator state for the given instant.
///
/// Hidden when the instant is on a different calendar date than the column
/// or outside the bounded hour range; otherwise the vertical offset uses
/// the same percentage formula as the event geometry.
pub fn indicator_position(now: DateTime<Local>, date: NaiveDate, range: HourRange) -> NowIndicator {
    if now.date_naive() != date {
        return NowIndicator::Hidden;
    }
    if !range.contains_minute_of_day(minute_of_day(now)) {
        return NowIndicator::Hidden;
    }

    let offset = minutes_from_hour(date, range.start_hour(), now);
    let top_pct = (offset as f32 / range.total_minutes() as f32) * 100.0;
    NowIndicator::Visible { top_pct }
}

/// Recurring wall-clock ticker owned by the consuming view's lifecycle.
///
/// Fires the callback once immediately and then on every period. Dropping
/// the ticker cancels the background thread, so navigating away from a
/// view never leaks a timer.
pub struct NowTicker {
    cancel: mpsc::Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl NowTicker {
    /// Start a ticker on the standard 60-second period.
    pub fn start<F>(on_tick: F) -> Self
    where
        F: FnMut(DateTime<Local>) + Send + 'static,
    {
        Self::with_period(TICK_PERIOD, on_tick)
    }

    /// Start a ticker on a custom period.
    pub fn with_period<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(DateTime<Local>) + Send + 'static,
    {
        let (cancel, cancelled) = mpsc::channel();

        let handle = thread::spawn(move || {
            on_tick(Local::now());
            loop {
                match cancelled.recv_timeout(period) {
                    Err(RecvTimeoutError::Timeout) => on_tick(Local::now()),
                    // Cancelled, or the handle was leaked and the sender dropped
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Self {
            cancel,
            handle: Some(handle),
        }
    }
}

impl Drop for NowTicker {
    fn drop(&mut self) {
        let _ = self.cancel.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
