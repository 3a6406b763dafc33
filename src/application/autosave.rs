//! Debounced draft autosave

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingSave {
    due: Instant,
    text: String,
}

/// Holds at most one pending draft save. Each new input replaces it.
#[derive(Debug, Clone)]
pub struct DraftAutosave {
    delay: Duration,
    pending: Option<PendingSave>,
}

impl DraftAutosave {
    pub fn new(delay: Duration) -> Self {
        DraftAutosave {
            delay,
            pending: None,
        }
    }

    /// Cancel any pending save and schedule `text` for `now + delay`
    pub fn on_input(&mut self, text: &str, now: Instant) {
        self.pending = Some(PendingSave {
            due: now + self.delay,
            text: text.to_string(),
        });
    }

    /// Take the pending draft once its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        match &self.pending {
            Some(pending) if pending.due <= now => self.pending.take().map(|p| p.text),
            _ => None,
        }
    }

    /// Take the pending draft immediately, regardless of its deadline
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|p| p.text)
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }
}
