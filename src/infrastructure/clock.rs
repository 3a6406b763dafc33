//! Time sources

use chrono::{DateTime, Local};
use std::time::Instant;

/// Provides wall-clock and monotonic time, so handlers can be tested
pub trait Clock {
    /// Wall-clock time, used for entry ids and timestamps
    fn now(&self) -> DateTime<Local>;

    /// Monotonic time, used for scheduling
    fn instant(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}
