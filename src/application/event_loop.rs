//! Single-threaded event loop driving the app from input events and tick deadlines

use crate::application::app::DiaryApp;
use crate::application::events::{AppEvent, Effect, Render};
use crate::domain::stopwatch::STOPWATCH_TICK;
use crate::domain::timer::TIMER_TICK;
use crate::error::Result;
use crate::infrastructure::{AudioCue, Clock, KeyValueStore, Notifier};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Receives render requests
pub trait Presenter {
    fn render(&mut self, render: &Render);
}

/// The collaborators effects are delivered to
pub struct Outputs<P, N, A> {
    pub presenter: P,
    pub notifier: N,
    pub audio: A,
}

impl<P: Presenter, N: Notifier, A: AudioCue> Outputs<P, N, A> {
    pub fn new(presenter: P, notifier: N, audio: A) -> Self {
        Outputs {
            presenter,
            notifier,
            audio,
        }
    }

    /// Hand each effect to its collaborator. A failing audio cue is ignored.
    pub fn deliver(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Render(render) => self.presenter.render(&render),
                Effect::Notify { message, severity } => self.notifier.notify(&message, severity),
                Effect::CompletionCue => {
                    if let Err(e) = self.audio.play() {
                        debug!("Audio notification not supported: {}", e);
                    }
                }
            }
        }
    }
}

/// A repeating tick. Holds a deadline only while its tracker runs.
#[derive(Debug, Clone, Copy)]
struct Ticker {
    period: Duration,
    due: Option<Instant>,
}

impl Ticker {
    fn new(period: Duration) -> Self {
        Ticker { period, due: None }
    }

    /// Schedule when running and idle, drop the deadline when stopped
    fn sync(&mut self, running: bool, now: Instant) {
        match (running, self.due) {
            (true, None) => self.due = Some(now + self.period),
            (false, Some(_)) => self.due = None,
            _ => {}
        }
    }

    /// Consume the deadline if it has passed, scheduling the next one
    fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if due <= now => {
                self.due = Some(due + self.period);
                true
            }
            _ => false,
        }
    }
}

fn earliest(deadlines: &[Option<Instant>]) -> Option<Instant> {
    deadlines.iter().flatten().min().copied()
}

/// Run until an `Unload` event arrives, `done` returns true, or input has
/// closed with nothing left scheduled.
///
/// All state lives in `app`; this thread is its only writer. Each wait lasts
/// until the next input or the earliest pending tick or autosave.
pub fn run<S, C, P, N, A, F>(
    app: &mut DiaryApp<S, C>,
    events: Receiver<AppEvent>,
    outputs: &mut Outputs<P, N, A>,
    mut done: F,
) -> Result<()>
where
    S: KeyValueStore,
    C: Clock,
    P: Presenter,
    N: Notifier,
    A: AudioCue,
    F: FnMut(&DiaryApp<S, C>) -> bool,
{
    let mut stopwatch = Ticker::new(STOPWATCH_TICK);
    let mut timer = Ticker::new(TIMER_TICK);
    let mut input_open = true;

    app.initial_render();
    outputs.deliver(app.take_effects());

    loop {
        if done(&*app) {
            debug!("stop condition reached");
            break;
        }

        let now = app.clock().instant();
        stopwatch.sync(app.stopwatch().is_running(), now);
        timer.sync(app.timer().is_running(), now);

        let next = earliest(&[stopwatch.due, timer.due, app.autosave_deadline()]);
        let received = if input_open {
            let result = match next {
                Some(due) => events.recv_timeout(due.saturating_duration_since(now)),
                None => events.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match result {
                Ok(event) => Some(event),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => {
                    debug!("input closed");
                    input_open = false;
                    continue;
                }
            }
        } else {
            match next {
                Some(due) => {
                    thread::sleep(due.saturating_duration_since(now));
                    None
                }
                None => break,
            }
        };

        match received {
            Some(event) => {
                let unload = event == AppEvent::Unload;
                app.dispatch(event)?;
                outputs.deliver(app.take_effects());
                if unload {
                    info!("unload received, leaving event loop");
                    return Ok(());
                }
            }
            None => {
                let now = app.clock().instant();
                if stopwatch.fire(now) {
                    app.dispatch(AppEvent::StopwatchTick)?;
                }
                if timer.fire(now) {
                    app.dispatch(AppEvent::TimerTick)?;
                }
                app.poll_autosave()?;
                outputs.deliver(app.take_effects());
            }
        }
    }

    app.dispatch(AppEvent::Unload)?;
    outputs.deliver(app.take_effects());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::store::DRAFT_KEY;
    use crate::infrastructure::{Config, MemoryStore, Severity, SystemClock};
    use std::io;
    use std::sync::mpsc;

    #[derive(Default)]
    struct Recorder {
        renders: Vec<Render>,
    }

    impl Presenter for Recorder {
        fn render(&mut self, render: &Render) {
            self.renders.push(render.clone());
        }
    }

    #[derive(Default)]
    struct Messages {
        seen: Vec<(String, Severity)>,
    }

    impl Notifier for Messages {
        fn notify(&mut self, message: &str, severity: Severity) {
            self.seen.push((message.to_string(), severity));
        }
    }

    struct BrokenSpeaker;

    impl AudioCue for BrokenSpeaker {
        fn play(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::Unsupported, "no audio device"))
        }
    }

    fn outputs() -> Outputs<Recorder, Messages, BrokenSpeaker> {
        Outputs::new(Recorder::default(), Messages::default(), BrokenSpeaker)
    }

    #[test]
    fn test_ticker_schedule() {
        let start = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(10));

        ticker.sync(true, start);
        assert_eq!(ticker.due, Some(start + Duration::from_millis(10)));

        ticker.sync(true, start + Duration::from_millis(5));
        assert_eq!(ticker.due, Some(start + Duration::from_millis(10)));

        assert!(!ticker.fire(start + Duration::from_millis(9)));
        assert!(ticker.fire(start + Duration::from_millis(10)));
        assert_eq!(ticker.due, Some(start + Duration::from_millis(20)));

        ticker.sync(false, start);
        assert_eq!(ticker.due, None);
        assert!(!ticker.fire(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_earliest() {
        let start = Instant::now();
        let later = start + Duration::from_secs(1);
        assert_eq!(earliest(&[None, Some(later), Some(start)]), Some(start));
        assert_eq!(earliest(&[None, None]), None);
    }

    #[test]
    fn test_audio_failure_is_swallowed() {
        let mut outputs = outputs();
        outputs.deliver(vec![
            Effect::CompletionCue,
            Effect::Notify {
                message: "Timer completed!".to_string(),
                severity: Severity::Success,
            },
        ]);
        assert_eq!(outputs.notifier.seen.len(), 1);
    }

    #[test]
    fn test_run_processes_events_until_unload() {
        let mut app = DiaryApp::load(MemoryStore::new(), SystemClock, &Config::new()).unwrap();
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::Input("hello".to_string())).unwrap();
        tx.send(AppEvent::SaveEntry).unwrap();
        tx.send(AppEvent::Input("draft".to_string())).unwrap();
        tx.send(AppEvent::Unload).unwrap();

        let mut outputs = outputs();
        run(&mut app, rx, &mut outputs, |_| false).unwrap();

        assert_eq!(app.diary().len(), 1);
        assert_eq!(app.store().get(DRAFT_KEY).unwrap().as_deref(), Some("draft"));
        assert!(outputs
            .notifier
            .seen
            .contains(&("Entry saved successfully!".to_string(), Severity::Success)));
    }

    #[test]
    fn test_run_ticks_stopwatch() {
        let mut app = DiaryApp::load(MemoryStore::new(), SystemClock, &Config::new()).unwrap();
        let (tx, rx) = mpsc::channel();

        let sender = thread::spawn(move || {
            tx.send(AppEvent::StopwatchStart).unwrap();
            thread::sleep(Duration::from_millis(100));
            tx.send(AppEvent::StopwatchPause).unwrap();
        });

        let mut outputs = outputs();
        run(&mut app, rx, &mut outputs, |_| false).unwrap();
        sender.join().unwrap();

        let elapsed = app.stopwatch().elapsed_ms();
        assert!(elapsed > 0);
        assert_eq!(elapsed % 10, 0);
        assert!(!app.stopwatch().is_running());
        assert!(outputs
            .presenter
            .renders
            .iter()
            .any(|render| matches!(render, Render::Stopwatch(text) if text != "00:00.00")));
    }

    #[test]
    fn test_run_finishes_timer_after_input_closes() {
        let mut app = DiaryApp::load(MemoryStore::new(), SystemClock, &Config::new()).unwrap();
        let (tx, rx) = mpsc::channel();
        tx.send(AppEvent::SwitchTab(crate::application::Tab::Timer))
            .unwrap();
        tx.send(AppEvent::TimerInputsChanged(crate::domain::TimerInputs::new(0, 0, 1)))
            .unwrap();
        tx.send(AppEvent::TimerStart).unwrap();
        drop(tx);

        let mut outputs = outputs();
        run(&mut app, rx, &mut outputs, |app| {
            app.timer().status() == crate::domain::TimerStatus::Complete
        })
        .unwrap();

        assert_eq!(app.timer().remaining_ms(), 0);
        assert!(outputs
            .notifier
            .seen
            .contains(&("Timer completed!".to_string(), Severity::Success)));
        assert!(outputs.presenter.renders.contains(&Render::TimerPulse));
    }
}
