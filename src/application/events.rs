//! Events consumed by the app and the effects it emits

use crate::domain::{DiaryEntry, Theme, TimerInputs};
use crate::infrastructure::Severity;
use std::str::FromStr;

/// Which time tracker is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Stopwatch,
    Timer,
}

/// Recognised keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCombo {
    /// Ctrl+S: save the current input as an entry
    CtrlS,
    /// Ctrl+L: clear the input
    CtrlL,
    /// Ctrl+P: toggle private mode
    CtrlP,
    /// Space: start or pause the tracker on the active tab
    Space,
}

impl FromStr for KeyCombo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "").as_str() {
            "ctrl+s" => Ok(KeyCombo::CtrlS),
            "ctrl+l" => Ok(KeyCombo::CtrlL),
            "ctrl+p" => Ok(KeyCombo::CtrlP),
            "space" => Ok(KeyCombo::Space),
            _ => Err(format!("Unknown key combo: '{}'", s)),
        }
    }
}

/// Everything the host can tell the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Input(String),
    SaveEntry,
    ClearInput,
    DeleteEntry { id: i64, confirmed: bool },
    SelectTheme(Theme),
    TogglePrivate,
    SwitchTab(Tab),
    StopwatchStart,
    StopwatchPause,
    StopwatchReset,
    Lap,
    TimerStart,
    TimerPause,
    TimerReset,
    TimerInputsChanged(TimerInputs),
    Key(KeyCombo),
    /// The view was hidden
    Hidden,
    /// The view is closing
    Unload,
    StopwatchTick,
    TimerTick,
}

/// What the presentation layer is asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Render {
    Entries(Vec<DiaryEntry>),
    Laps(Vec<String>),
    Stopwatch(String),
    Timer(String),
    Theme(Theme),
    Private {
        active: bool,
        icon: &'static str,
        title: &'static str,
    },
    Input(String),
    Tab(Tab),
    TimerPulse,
}

/// Output of a handler, delivered to collaborators by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Render(Render),
    Notify { message: String, severity: Severity },
    CompletionCue,
}
