//! Interactive stopwatch and timer sessions on the terminal

use crate::application::{AppEvent, KeyCombo, Tab};
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tracing::debug;

pub const STOPWATCH_HELP: &str =
    "Enter: start/pause  s: start  p: pause  l: lap  r: reset  q: quit";
pub const TIMER_HELP: &str = "Enter: start/pause  s: start  p: pause  r: reset  q: quit";

/// Map one line typed during a session to an event for the active tab
pub fn parse_session_line(line: &str, tab: Tab) -> Option<AppEvent> {
    let event = match (line.trim().to_lowercase().as_str(), tab) {
        ("", _) => AppEvent::Key(KeyCombo::Space),
        ("q" | "quit", _) => AppEvent::Unload,
        ("s" | "start", Tab::Stopwatch) => AppEvent::StopwatchStart,
        ("p" | "pause", Tab::Stopwatch) => AppEvent::StopwatchPause,
        ("r" | "reset", Tab::Stopwatch) => AppEvent::StopwatchReset,
        ("l" | "lap", Tab::Stopwatch) => AppEvent::Lap,
        ("s" | "start", Tab::Timer) => AppEvent::TimerStart,
        ("p" | "pause", Tab::Timer) => AppEvent::TimerPause,
        ("r" | "reset", Tab::Timer) => AppEvent::TimerReset,
        _ => return None,
    };
    Some(event)
}

/// Read lines from `input` on a separate thread and forward them as events.
///
/// The reader owns no state; the channel closes when input ends or after `q`.
pub fn spawn_line_reader<R>(input: R, tab: Tab) -> Receiver<AppEvent>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for line in input.lines() {
            let Ok(line) = line else {
                break;
            };
            let Some(event) = parse_session_line(&line, tab) else {
                debug!(%line, "ignoring unknown session command");
                continue;
            };
            let unload = event == AppEvent::Unload;
            if tx.send(event).is_err() || unload {
                break;
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_stopwatch_lines() {
        assert_eq!(
            parse_session_line("", Tab::Stopwatch),
            Some(AppEvent::Key(KeyCombo::Space))
        );
        assert_eq!(parse_session_line(" L ", Tab::Stopwatch), Some(AppEvent::Lap));
        assert_eq!(
            parse_session_line("reset", Tab::Stopwatch),
            Some(AppEvent::StopwatchReset)
        );
        assert_eq!(parse_session_line("q", Tab::Stopwatch), Some(AppEvent::Unload));
        assert_eq!(parse_session_line("x", Tab::Stopwatch), None);
    }

    #[test]
    fn test_parse_timer_lines() {
        assert_eq!(parse_session_line("s", Tab::Timer), Some(AppEvent::TimerStart));
        assert_eq!(parse_session_line("p", Tab::Timer), Some(AppEvent::TimerPause));
        assert_eq!(parse_session_line("l", Tab::Timer), None);
    }

    #[test]
    fn test_line_reader_stops_after_quit() {
        let rx = spawn_line_reader(Cursor::new("s\nbogus\nl\nq\np\n"), Tab::Stopwatch);
        let events: Vec<AppEvent> = rx.iter().collect();

        assert_eq!(
            events,
            vec![AppEvent::StopwatchStart, AppEvent::Lap, AppEvent::Unload]
        );
    }
}
