//! Wall-clock timing for generation runs.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Timing stats for one pipeline scope, in milliseconds since the Unix epoch.
///
/// `elapsed_ms` is always `end - start` saturated at zero: a zero-duration
/// run is valid, a negative one never occurs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeStats {
    pub start_time_ms: u64,
    pub end_time_ms: u64,
    pub elapsed_ms: u64,
}

/// Start/stop timer owned by a context.
///
/// The handle is cheaply cloneable; clones share the same clock state, which
/// lets a context factory hand an existing timer to a child scope when the
/// caller asks for it.
#[derive(Debug, Clone, Default)]
pub struct Timer {
    inner: Rc<RefCell<TimerInner>>,
}

#[derive(Debug, Default)]
struct TimerInner {
    start_time_ms: Option<u64>,
    end_time_ms: Option<u64>,
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl Timer {
    /// Create a fresh, unstarted timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp the start of the measured interval
    pub fn start(&self) {
        self.inner.borrow_mut().start_time_ms = Some(now_ms());
    }

    /// Stamp the end of the interval and return the resulting stats
    pub fn stop(&self) -> TimeStats {
        self.inner.borrow_mut().end_time_ms = Some(now_ms());
        self.stats()
    }

    /// Current stats; unset stamps read as zero
    pub fn stats(&self) -> TimeStats {
        let inner = self.inner.borrow();
        let start_time_ms = inner.start_time_ms.unwrap_or(0);
        let end_time_ms = inner.end_time_ms.unwrap_or(0);
        TimeStats {
            start_time_ms,
            end_time_ms,
            elapsed_ms: end_time_ms.saturating_sub(start_time_ms),
        }
    }
}
