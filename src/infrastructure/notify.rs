//! Notification and audio collaborators

use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Error,
}

impl Severity {
    fn marker(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✓",
            Severity::Error => "✗",
        }
    }
}

/// Shows a transient message. Fire-and-forget.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// Plays the timer completion cue. Best-effort.
pub trait AudioCue {
    fn play(&mut self) -> io::Result<()>;
}

/// Writes notifications as marked lines to a sink (stderr by default)
pub struct ConsoleNotifier<W: Write> {
    out: W,
}

impl ConsoleNotifier<io::Stderr> {
    pub fn stderr() -> Self {
        ConsoleNotifier { out: io::stderr() }
    }
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(out: W) -> Self {
        ConsoleNotifier { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, message: &str, severity: Severity) {
        // Nothing useful to do if the terminal is gone.
        let _ = writeln!(self.out, "{} {}", severity.marker(), message);
    }
}

/// Rings the terminal bell
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    pub fn stdout() -> Self {
        TerminalBell { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        TerminalBell { out }
    }
}

impl<W: Write> AudioCue for TerminalBell<W> {
    fn play(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}
