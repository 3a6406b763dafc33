//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod session;

pub use commands::{Cli, Commands};
pub use output::{format_date_header, format_entry_list, TerminalPresenter};
pub use session::{parse_session_line, spawn_line_reader};
