//! Output formatting utilities

use crate::application::{Presenter, Render, Tab};
use crate::domain::DiaryEntry;
use chrono::{DateTime, Local};
use std::io::{self, Write};

pub const NO_ENTRIES_MESSAGE: &str = "No entries yet. Start writing your first diary entry!";
pub const PRIVATE_MESSAGE: &str = "Diary hidden (private mode). Run 'blossom private' to show it.";

/// Long form of today's date, shown above the entry list
pub fn format_date_header(today: DateTime<Local>) -> String {
    today.format("%A, %B %-d, %Y").to_string()
}

/// Format diary entries for display, newest first
pub fn format_entry_list<'a, I>(entries: I, private_mode: bool) -> String
where
    I: IntoIterator<Item = &'a DiaryEntry>,
{
    if private_mode {
        return PRIVATE_MESSAGE.to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("{}  [{}]\n", entry.timestamp, entry.id));
        for line in entry.text.lines() {
            output.push_str(&format!("    {}\n", line));
        }
        output.push('\n');
    }

    if output.is_empty() {
        return NO_ENTRIES_MESSAGE.to_string();
    }
    output
}

/// Draws the running tracker on a single terminal line.
///
/// Only the tracker on the active tab is shown; diary renders are left to the
/// one-shot commands.
pub struct TerminalPresenter<W: Write> {
    out: W,
    tab: Tab,
    laps_shown: usize,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalPresenter::new(io::stdout())
    }
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        TerminalPresenter {
            out,
            tab: Tab::default(),
            laps_shown: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, render: &Render) -> io::Result<()> {
        match render {
            Render::Tab(tab) => self.tab = *tab,
            Render::Stopwatch(text) if self.tab == Tab::Stopwatch => {
                write!(self.out, "\r{}", text)?;
            }
            Render::Timer(text) if self.tab == Tab::Timer => {
                write!(self.out, "\r{}", text)?;
            }
            Render::Laps(lines) => {
                if lines.len() < self.laps_shown {
                    self.laps_shown = 0;
                }
                for line in &lines[self.laps_shown..] {
                    writeln!(self.out, "\r{}", line)?;
                }
                self.laps_shown = lines.len();
            }
            Render::TimerPulse => writeln!(self.out)?,
            _ => {}
        }
        self.out.flush()
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, render: &Render) {
        // Nothing useful to do if the terminal is gone.
        let _ = self.draw(render);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::DEFAULT_TIMESTAMP_FORMAT;
    use chrono::{Local, TimeZone};

    fn entry(id: i64, text: &str) -> DiaryEntry {
        let created = Local.with_ymd_and_hms(2025, 1, 17, 14, 5, 9).unwrap();
        DiaryEntry::new(id, text.to_string(), created, DEFAULT_TIMESTAMP_FORMAT)
    }

    #[test]
    fn test_date_header() {
        let today = Local.with_ymd_and_hms(2025, 1, 17, 23, 59, 0).unwrap();
        assert_eq!(format_date_header(today), "Friday, January 17, 2025");

        let today = Local.with_ymd_and_hms(2024, 3, 4, 8, 0, 0).unwrap();
        assert_eq!(format_date_header(today), "Monday, March 4, 2024");
    }

    #[test]
    fn test_format_empty_list() {
        let entries: Vec<DiaryEntry> = vec![];
        assert_eq!(format_entry_list(&entries, false), NO_ENTRIES_MESSAGE);
    }

    #[test]
    fn test_format_entry_list() {
        let entries = vec![entry(2, "second\nmore"), entry(1, "first")];
        let output = format_entry_list(&entries, false);

        assert_eq!(
            output,
            "1/17/2025, 2:05:09 PM  [2]\n    second\n    more\n\n\
             1/17/2025, 2:05:09 PM  [1]\n    first\n\n"
        );
    }

    #[test]
    fn test_private_mode_hides_entries() {
        let entries = vec![entry(1, "secret")];
        let output = format_entry_list(&entries, true);
        assert_eq!(output, PRIVATE_MESSAGE);
        assert!(!output.contains("secret"));
    }

    #[test]
    fn test_presenter_shows_active_tab_only() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.render(&Render::Stopwatch("00:01.00".to_string()));
        presenter.render(&Render::Timer("01:30".to_string()));
        presenter.render(&Render::Tab(Tab::Timer));
        presenter.render(&Render::Timer("01:29".to_string()));

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(out, "\r00:01.00\r01:29");
    }

    #[test]
    fn test_presenter_prints_new_laps() {
        let mut presenter = TerminalPresenter::new(Vec::new());
        presenter.render(&Render::Laps(vec!["Lap 1  00:01.23".to_string()]));
        presenter.render(&Render::Laps(vec![
            "Lap 1  00:01.23".to_string(),
            "Lap 2  00:02.00".to_string(),
        ]));
        presenter.render(&Render::Laps(Vec::new()));
        presenter.render(&Render::Laps(vec!["Lap 1  00:00.50".to_string()]));

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(
            out,
            "\rLap 1  00:01.23\n\rLap 2  00:02.00\n\rLap 1  00:00.50\n"
        );
    }
}
