//! Count-up stopwatch with lap capture

use crate::domain::time_format::format_stopwatch;
use std::time::Duration;

/// Interval between stopwatch ticks
pub const STOPWATCH_TICK: Duration = Duration::from_millis(10);

const TICK_MS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwatchStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Stopwatch state machine. Time only advances through `tick`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    elapsed_ms: u64,
    status: StopwatchStatus,
    laps: Vec<u64>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Stopwatch::default()
    }

    /// Start counting. Returns false if it was already running.
    pub fn start(&mut self) -> bool {
        if self.is_running() {
            return false;
        }
        self.status = StopwatchStatus::Running;
        true
    }

    /// Stop counting, keeping elapsed time. Returns false if it was not running.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.status = StopwatchStatus::Paused;
        true
    }

    /// Pause, then clear elapsed time and laps
    pub fn reset(&mut self) {
        self.pause();
        self.elapsed_ms = 0;
        self.laps.clear();
        self.status = StopwatchStatus::Idle;
    }

    /// Advance by one tick. Returns false when the tick was ignored.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed_ms += TICK_MS;
        true
    }

    /// Record the current elapsed time as a lap.
    ///
    /// Only counts while running with a non-zero elapsed time.
    pub fn lap(&mut self) -> Option<u64> {
        if !self.is_running() || self.elapsed_ms == 0 {
            return None;
        }
        self.laps.push(self.elapsed_ms);
        Some(self.elapsed_ms)
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    pub fn status(&self) -> StopwatchStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == StopwatchStatus::Running
    }

    pub fn display(&self) -> String {
        format_stopwatch(self.elapsed_ms)
    }

    /// Lap list as display lines, numbered from 1
    pub fn lap_lines(&self) -> Vec<String> {
        self.laps
            .iter()
            .enumerate()
            .map(|(index, lap)| format!("Lap {}  {}", index + 1, format_stopwatch(*lap)))
            .collect()
    }
}
