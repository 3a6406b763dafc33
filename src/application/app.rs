//! Application state and event handlers

use crate::application::autosave::DraftAutosave;
use crate::application::events::{AppEvent, Effect, KeyCombo, Render, Tab};
use crate::domain::preferences::parse_private_flag;
use crate::domain::{
    DiaryEntry, DiaryStore, Preferences, Stopwatch, Theme, Timer, TimerInputs, TimerTick,
};
use crate::error::{BlossomError, Result};
use crate::infrastructure::store::{DRAFT_KEY, ENTRIES_KEY, PRIVATE_MODE_KEY, THEME_KEY};
use crate::infrastructure::{Clock, Config, KeyValueStore, Severity, SystemClock};
use std::str::FromStr;
use std::time::Instant;
use tracing::{debug, error, info, trace, warn};

pub const ENTRY_SAVED_MESSAGE: &str = "Entry saved successfully!";
pub const ENTRY_DELETED_MESSAGE: &str = "Entry deleted successfully!";
pub const TIMER_COMPLETED_MESSAGE: &str = "Timer completed!";

/// Decode the persisted entry list
pub fn load_entries(raw: &str) -> Result<Vec<DiaryEntry>> {
    serde_json::from_str(raw).map_err(|e| BlossomError::Deserialization(e.to_string()))
}

/// All application state, owned in one place and mutated only by its handlers.
///
/// Handlers queue [`Effect`]s instead of talking to the presentation layer;
/// the host drains them with [`DiaryApp::take_effects`].
pub struct DiaryApp<S: KeyValueStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    timestamp_format: String,
    diary: DiaryStore,
    preferences: Preferences,
    stopwatch: Stopwatch,
    timer: Timer,
    timer_inputs: TimerInputs,
    input: String,
    autosave: DraftAutosave,
    active_tab: Tab,
    effects: Vec<Effect>,
}

impl<S: KeyValueStore, C: Clock> DiaryApp<S, C> {
    /// Restore state from `store`.
    ///
    /// A corrupt entry list is logged and replaced by an empty one.
    pub fn load(store: S, clock: C, config: &Config) -> Result<Self> {
        let theme = match store.get(THEME_KEY)? {
            Some(name) => Theme::from_str(&name).unwrap_or_else(|e| {
                warn!("{}; falling back to {}", e, Theme::default());
                Theme::default()
            }),
            None => Theme::default(),
        };

        let entries = match store.get(ENTRIES_KEY)? {
            Some(raw) => load_entries(&raw).unwrap_or_else(|e| {
                error!("Error loading diary entries: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        let private_mode = store
            .get(PRIVATE_MODE_KEY)?
            .map(|flag| parse_private_flag(&flag))
            .unwrap_or(false);

        let input = store.get(DRAFT_KEY)?.unwrap_or_default();

        debug!(
            entries = entries.len(),
            %theme,
            private_mode,
            "loaded diary state"
        );

        Ok(DiaryApp {
            store,
            clock,
            timestamp_format: config.timestamp_format.clone(),
            diary: DiaryStore::from_entries(entries),
            preferences: Preferences {
                theme,
                private_mode,
            },
            stopwatch: Stopwatch::new(),
            timer: Timer::new(),
            timer_inputs: TimerInputs::default(),
            input,
            autosave: DraftAutosave::new(config.autosave_delay()),
            active_tab: Tab::default(),
            effects: Vec::new(),
        })
    }

    /// Queue the renders needed to draw the whole view
    pub fn initial_render(&mut self) {
        self.render(Render::Theme(self.preferences.theme));
        self.render_private();
        self.render_entries();
        self.render(Render::Input(self.input.clone()));
        self.render(Render::Tab(self.active_tab));
        self.render(Render::Stopwatch(self.stopwatch.display()));
        self.render(Render::Timer(self.timer.display()));
    }

    /// Persist theme, entries and private flag
    pub fn save_to_storage(&mut self) -> Result<()> {
        let entries = serde_json::to_string(self.diary.as_slice())?;
        self.store.set(THEME_KEY, self.preferences.theme.name())?;
        self.store.set(ENTRIES_KEY, &entries)?;
        self.store.set(
            PRIVATE_MODE_KEY,
            if self.preferences.private_mode {
                "true"
            } else {
                "false"
            },
        )?;
        trace!(entries = self.diary.len(), "state persisted");
        Ok(())
    }

    /// Persist a diary change, restoring `previous` when the write fails
    fn commit_diary(&mut self, previous: DiaryStore) -> Result<()> {
        if let Err(e) = self.save_to_storage() {
            warn!("Failed to persist diary, keeping previous entries: {}", e);
            self.diary = previous;
            return Err(e);
        }
        Ok(())
    }

    /// Persist the current input as the draft, dropping any pending autosave
    pub fn save_draft(&mut self) -> Result<()> {
        self.autosave.cancel();
        self.store.set(DRAFT_KEY, &self.input)
    }

    /// Replace the input text and schedule a draft autosave
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.autosave.on_input(text, self.clock.instant());
    }

    /// Save the pending draft if its quiet period has elapsed
    pub fn poll_autosave(&mut self) -> Result<bool> {
        match self.autosave.poll(self.clock.instant()) {
            Some(draft) => {
                trace!(len = draft.len(), "autosaving draft");
                self.store.set(DRAFT_KEY, &draft)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Save the current input as a new entry
    pub fn save_entry(&mut self) -> Result<i64> {
        let text = self.input.clone();
        self.add_entry(&text)
    }

    /// Save `text` as a new entry, then clear the input and the stored draft
    pub fn add_entry(&mut self, text: &str) -> Result<i64> {
        let now = self.clock.now();
        let previous = self.diary.clone();
        let id = self.diary.add_entry(text, now, &self.timestamp_format)?.id;

        self.commit_diary(previous)?;
        self.render_entries();

        self.input.clear();
        self.autosave.cancel();
        self.store.remove(DRAFT_KEY)?;
        self.render(Render::Input(String::new()));

        info!(id, "entry saved");
        self.notify(ENTRY_SAVED_MESSAGE, Severity::Success);
        Ok(id)
    }

    /// Clear the input and the stored draft
    pub fn clear_input(&mut self) -> Result<()> {
        self.input.clear();
        self.autosave.cancel();
        self.store.remove(DRAFT_KEY)?;
        self.render(Render::Input(String::new()));
        Ok(())
    }

    /// Delete an entry once the user has confirmed.
    ///
    /// Returns false when unconfirmed or when no entry has `id`.
    pub fn delete_entry(&mut self, id: i64, confirmed: bool) -> Result<bool> {
        if !confirmed {
            debug!(id, "delete not confirmed");
            return Ok(false);
        }

        let previous = self.diary.clone();
        if !self.diary.delete_entry(id) {
            debug!(id, "no entry to delete");
            return Ok(false);
        }

        self.commit_diary(previous)?;
        self.render_entries();
        info!(id, "entry deleted");
        self.notify(ENTRY_DELETED_MESSAGE, Severity::Success);
        Ok(true)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.preferences.theme = theme;
        self.render(Render::Theme(theme));
        self.save_to_storage()
    }

    /// Flip private mode and return the new value
    pub fn toggle_private_mode(&mut self) -> Result<bool> {
        let active = self.preferences.toggle_private_mode();
        self.render_private();
        self.save_to_storage()?;
        Ok(active)
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.render(Render::Tab(tab));
    }

    pub fn start_stopwatch(&mut self) -> bool {
        self.stopwatch.start()
    }

    pub fn pause_stopwatch(&mut self) -> bool {
        self.stopwatch.pause()
    }

    pub fn reset_stopwatch(&mut self) {
        self.stopwatch.reset();
        self.render(Render::Stopwatch(self.stopwatch.display()));
        self.render(Render::Laps(Vec::new()));
    }

    pub fn lap(&mut self) -> Option<u64> {
        let lap = self.stopwatch.lap()?;
        self.render(Render::Laps(self.stopwatch.lap_lines()));
        Some(lap)
    }

    pub fn stopwatch_tick(&mut self) {
        if self.stopwatch.tick() {
            self.render(Render::Stopwatch(self.stopwatch.display()));
        }
    }

    /// Start the countdown, loading the duration from the inputs when needed
    pub fn start_timer(&mut self) -> Result<bool> {
        let inputs = self.timer_inputs;
        let started = self.timer.start(&inputs)?;
        if started {
            self.render(Render::Timer(self.timer.display()));
        }
        Ok(started)
    }

    pub fn pause_timer(&mut self) -> bool {
        self.timer.pause()
    }

    pub fn reset_timer(&mut self) {
        let inputs = self.timer_inputs;
        self.timer.reset(&inputs);
        self.render(Render::Timer(self.timer.display()));
    }

    /// Record new inputs and reload the remaining time from them
    pub fn set_timer_inputs(&mut self, inputs: TimerInputs) {
        self.timer_inputs = inputs;
        self.timer.set_from_inputs(&inputs);
        self.render(Render::Timer(self.timer.display()));
    }

    pub fn timer_tick(&mut self) -> TimerTick {
        let outcome = self.timer.tick();
        match outcome {
            TimerTick::Ignored => {}
            TimerTick::Running { .. } => {
                self.render(Render::Timer(self.timer.display()));
            }
            TimerTick::Completed => {
                info!("timer completed");
                self.render(Render::Timer(self.timer.display()));
                self.notify(TIMER_COMPLETED_MESSAGE, Severity::Success);
                self.effects.push(Effect::CompletionCue);
                self.render(Render::TimerPulse);
            }
        }
        outcome
    }

    /// Persist everything, including the draft. Used when the view hides or closes.
    pub fn persist_all(&mut self) -> Result<()> {
        self.save_draft()?;
        self.save_to_storage()
    }

    /// Apply one event. Validation failures become error notifications.
    pub fn dispatch(&mut self, event: AppEvent) -> Result<()> {
        trace!(?event, "dispatch");
        match self.handle(event) {
            Err(BlossomError::Validation(message)) => {
                debug!(%message, "validation failed");
                self.notify(&message, Severity::Error);
                Ok(())
            }
            other => other,
        }
    }

    fn handle(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Input(text) => self.set_input(&text),
            AppEvent::SaveEntry | AppEvent::Key(KeyCombo::CtrlS) => {
                self.save_entry()?;
            }
            AppEvent::ClearInput | AppEvent::Key(KeyCombo::CtrlL) => self.clear_input()?,
            AppEvent::DeleteEntry { id, confirmed } => {
                self.delete_entry(id, confirmed)?;
            }
            AppEvent::SelectTheme(theme) => self.set_theme(theme)?,
            AppEvent::TogglePrivate | AppEvent::Key(KeyCombo::CtrlP) => {
                self.toggle_private_mode()?;
            }
            AppEvent::SwitchTab(tab) => self.switch_tab(tab),
            AppEvent::StopwatchStart => {
                self.start_stopwatch();
            }
            AppEvent::StopwatchPause => {
                self.pause_stopwatch();
            }
            AppEvent::StopwatchReset => self.reset_stopwatch(),
            AppEvent::Lap => {
                self.lap();
            }
            AppEvent::TimerStart => {
                self.start_timer()?;
            }
            AppEvent::TimerPause => {
                self.pause_timer();
            }
            AppEvent::TimerReset => self.reset_timer(),
            AppEvent::TimerInputsChanged(inputs) => self.set_timer_inputs(inputs),
            AppEvent::Key(KeyCombo::Space) => match self.active_tab {
                Tab::Stopwatch => {
                    if !self.pause_stopwatch() {
                        self.start_stopwatch();
                    }
                }
                Tab::Timer => {
                    if !self.pause_timer() {
                        self.start_timer()?;
                    }
                }
            },
            AppEvent::Hidden | AppEvent::Unload => self.persist_all()?,
            AppEvent::StopwatchTick => self.stopwatch_tick(),
            AppEvent::TimerTick => {
                self.timer_tick();
            }
        }
        Ok(())
    }

    /// Drain the effects queued since the last call
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn diary(&self) -> &DiaryStore {
        &self.diary
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn timer_inputs(&self) -> TimerInputs {
        self.timer_inputs
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn autosave_deadline(&self) -> Option<Instant> {
        self.autosave.deadline()
    }

    fn render(&mut self, render: Render) {
        self.effects.push(Effect::Render(render));
    }

    fn render_entries(&mut self) {
        self.render(Render::Entries(self.diary.as_slice().to_vec()));
    }

    fn render_private(&mut self) {
        let (icon, title) = self.preferences.private_toggle_label();
        self.render(Render::Private {
            active: self.preferences.private_mode,
            icon,
            title,
        });
    }

    fn notify(&mut self, message: &str, severity: Severity) {
        self.effects.push(Effect::Notify {
            message: message.to_string(),
            severity,
        });
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::{DateTime, Duration as ChronoDuration, Local, TimeZone};
    use std::cell::Cell;
    use std::time::Duration;

    /// Clock that only moves when told to
    pub struct ManualClock {
        wall: Cell<DateTime<Local>>,
        instant: Cell<Instant>,
    }

    impl ManualClock {
        pub fn new() -> Self {
            ManualClock {
                wall: Cell::new(Local.with_ymd_and_hms(2025, 1, 17, 9, 0, 0).unwrap()),
                instant: Cell::new(Instant::now()),
            }
        }

        pub fn advance(&self, by: Duration) {
            self.instant.set(self.instant.get() + by);
            let wall = self.wall.get() + ChronoDuration::from_std(by).unwrap();
            self.wall.set(wall);
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> DateTime<Local> {
            self.wall.get()
        }

        fn instant(&self) -> Instant {
            self.instant.get()
        }
    }
}
