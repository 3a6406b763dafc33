//! Countdown timer

use crate::domain::time_format::format_countdown;
use crate::error::{BlossomError, Result};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

/// Interval between timer ticks
pub const TIMER_TICK: Duration = Duration::from_millis(1000);

/// Message shown when the timer is started without a duration
pub const NO_DURATION_MESSAGE: &str = "Please set a time for the timer!";

const TICK_MS: i64 = 1000;

fn leading_int_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\s*([+-]?\d+)").unwrap())
}

fn compact_duration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*(?:(\d+)\s*h)?\s*(?:(\d+)\s*m)?\s*(?:(\d+)\s*s)?\s*$").unwrap()
    })
}

/// Parse the leading integer of `raw`, or 0 when there is none
fn parse_field(raw: &str) -> i64 {
    leading_int_regex()
        .captures(raw)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Hours, minutes and seconds entered for the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerInputs {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimerInputs {
    pub fn new(hours: i64, minutes: i64, seconds: i64) -> Self {
        TimerInputs {
            hours,
            minutes,
            seconds,
        }
    }

    /// Build inputs from raw field text. Unparseable fields count as 0.
    pub fn parse(hours: &str, minutes: &str, seconds: &str) -> Self {
        TimerInputs::new(parse_field(hours), parse_field(minutes), parse_field(seconds))
    }

    /// Parse a compact duration such as `1h30m`, `90s` or `2m 5s`
    pub fn parse_compact(s: &str) -> Result<Self> {
        let invalid = || BlossomError::Config(format!("Invalid duration: '{}'", s));

        if s.trim().is_empty() {
            return Err(invalid());
        }

        let caps = compact_duration_regex().captures(s).ok_or_else(invalid)?;
        let field = |idx: usize| -> Result<i64> {
            match caps.get(idx) {
                Some(m) => m.as_str().parse().map_err(|_| invalid()),
                None => Ok(0),
            }
        };

        Ok(TimerInputs::new(field(1)?, field(2)?, field(3)?))
    }

    /// Total duration in milliseconds
    pub fn total_ms(&self) -> i64 {
        self.hours
            .saturating_mul(3600)
            .saturating_add(self.minutes.saturating_mul(60))
            .saturating_add(self.seconds)
            .saturating_mul(1000)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Complete,
}

/// Result of one timer tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTick {
    /// The timer was not running
    Ignored,
    /// Still counting down
    Running { remaining_ms: i64 },
    /// Reached zero on this tick
    Completed,
}

/// Countdown timer state machine. Time only advances through `tick`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timer {
    remaining_ms: i64,
    status: TimerStatus,
}

impl Timer {
    pub fn new() -> Self {
        Timer::default()
    }

    /// Start counting down.
    ///
    /// With no time left the duration is taken from `inputs` first. Returns
    /// false if already running; fails when the duration is still zero.
    pub fn start(&mut self, inputs: &TimerInputs) -> Result<bool> {
        if self.is_running() {
            return Ok(false);
        }

        if self.remaining_ms <= 0 {
            self.set_from_inputs(inputs);
        }

        if self.remaining_ms <= 0 {
            return Err(BlossomError::Validation(NO_DURATION_MESSAGE.to_string()));
        }

        self.status = TimerStatus::Running;
        Ok(true)
    }

    /// Stop counting down. Returns false if it was not running.
    pub fn pause(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.status = TimerStatus::Paused;
        true
    }

    /// Stop and reload the duration from `inputs`
    pub fn reset(&mut self, inputs: &TimerInputs) {
        self.pause();
        self.set_from_inputs(inputs);
        self.status = TimerStatus::Idle;
    }

    /// Reload the remaining time from `inputs` without changing run state
    pub fn set_from_inputs(&mut self, inputs: &TimerInputs) {
        self.remaining_ms = inputs.total_ms();
    }

    pub fn tick(&mut self) -> TimerTick {
        if !self.is_running() {
            return TimerTick::Ignored;
        }

        self.remaining_ms -= TICK_MS;
        if self.remaining_ms <= 0 {
            self.status = TimerStatus::Complete;
            return TimerTick::Completed;
        }

        TimerTick::Running {
            remaining_ms: self.remaining_ms,
        }
    }

    pub fn remaining_ms(&self) -> i64 {
        self.remaining_ms
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    pub fn display(&self) -> String {
        format_countdown(self.remaining_ms)
    }
}
