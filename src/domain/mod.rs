//! Domain layer - Diary records, preferences and time trackers

pub mod diary;
pub mod entry;
pub mod preferences;
pub mod stopwatch;
pub mod theme;
pub mod time_format;
pub mod timer;

pub use diary::DiaryStore;
pub use entry::DiaryEntry;
pub use preferences::Preferences;
pub use stopwatch::{Stopwatch, StopwatchStatus};
pub use theme::Theme;
pub use timer::{Timer, TimerInputs, TimerStatus, TimerTick};
