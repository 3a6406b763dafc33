//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blossom")]
#[command(about = "Personal diary with a stopwatch and countdown timer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new diary
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Save a diary entry (uses the saved draft when no text is given)
    Write {
        /// Entry text
        text: Vec<String>,
    },

    /// List entries, newest first
    List,

    /// Delete an entry by id
    Delete {
        /// Entry id, as shown by `list`
        #[arg(allow_negative_numbers = true)]
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Show or set the theme (cherry-blossom, night-sky, forest)
    Theme {
        /// Theme to switch to
        name: Option<String>,
    },

    /// Toggle private mode
    Private,

    /// Show, replace or clear the draft
    Draft {
        /// New draft text
        text: Vec<String>,

        /// Clear the draft
        #[arg(short, long, conflicts_with = "text")]
        clear: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Run an interactive stopwatch
    Stopwatch,

    /// Run a countdown timer
    Timer {
        /// Compact duration, e.g. 25m, 1h30m, 90s
        duration: Option<String>,

        #[arg(long)]
        hours: Option<String>,

        #[arg(short, long)]
        minutes: Option<String>,

        #[arg(short, long)]
        seconds: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_write_joins_words() {
        let cli = Cli::parse_from(["blossom", "write", "hello", "world"]);
        match cli.command {
            Some(Commands::Write { text }) => assert_eq!(text, vec!["hello", "world"]),
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_timer_fields() {
        let cli = Cli::parse_from(["blossom", "timer", "-m", "1", "-s", "30"]);
        match cli.command {
            Some(Commands::Timer {
                duration,
                hours,
                minutes,
                seconds,
            }) => {
                assert_eq!(duration, None);
                assert_eq!(hours, None);
                assert_eq!(minutes.as_deref(), Some("1"));
                assert_eq!(seconds.as_deref(), Some("30"));
            }
            other => panic!("Unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_draft_clear_conflicts_with_text() {
        assert!(Cli::try_parse_from(["blossom", "draft", "x", "--clear"]).is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["blossom", "list", "--verbose"]);
        assert!(cli.verbose);
    }
}
