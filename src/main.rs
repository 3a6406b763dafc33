use blossom::application::{event_loop, init, ConfigService, DiaryApp, Outputs, Tab};
use blossom::cli::session::{STOPWATCH_HELP, TIMER_HELP};
use blossom::cli::{
    format_date_header, format_entry_list, spawn_line_reader, Cli, Commands, TerminalPresenter,
};
use blossom::domain::{Theme, TimerInputs, TimerStatus};
use blossom::error::{BlossomError, Result};
use blossom::infrastructure::{
    Clock, ConsoleNotifier, DiaryRepository, FileStore, FileSystemRepository, SystemClock,
    TerminalBell,
};
use blossom::logging;
use clap::Parser;
use std::io::{self, BufRead, BufReader, Write};
use std::str::FromStr;

type FileApp = DiaryApp<FileStore, SystemClock>;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::enable_logging(cli.verbose) {
        eprintln!("Warning: {:#}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn open_app() -> Result<FileApp> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    let store = repo.open_store()?;
    DiaryApp::load(store, SystemClock, &config)
}

fn terminal_outputs(
) -> Outputs<TerminalPresenter<io::Stdout>, ConsoleNotifier<io::Stderr>, TerminalBell<io::Stdout>>
{
    Outputs::new(
        TerminalPresenter::stdout(),
        ConsoleNotifier::stderr(),
        TerminalBell::stdout(),
    )
}

fn print_block(text: &str) {
    println!("{}", text.trim_end());
}

/// Ask on stdout, read the answer from stdin
fn confirm(question: &str) -> Result<bool> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let repo = init::init(&path)?;
            println!("Initialized blossom diary at {}", repo.root().display());
            Ok(())
        }
        Some(Commands::Write { text }) => {
            let mut app = open_app()?;
            let text = if text.is_empty() {
                app.input().to_string()
            } else {
                text.join(" ")
            };

            let id = app.add_entry(&text)?;
            terminal_outputs().deliver(app.take_effects());
            println!("Saved entry {}", id);
            Ok(())
        }
        Some(Commands::List) => {
            let app = open_app()?;
            println!("{}\n", format_date_header(app.clock().now()));
            print_block(&format_entry_list(
                app.diary().entries(),
                app.preferences().private_mode,
            ));
            Ok(())
        }
        Some(Commands::Delete { id, yes }) => {
            let mut app = open_app()?;
            let confirmed = yes || confirm("Are you sure you want to delete this entry?")?;
            if !app.delete_entry(id, confirmed)? {
                if confirmed {
                    println!("No entry with id {}", id);
                } else {
                    println!("Cancelled");
                }
            }
            terminal_outputs().deliver(app.take_effects());
            Ok(())
        }
        Some(Commands::Theme { name }) => {
            let mut app = open_app()?;
            match name {
                Some(name) => {
                    let theme = Theme::from_str(&name).map_err(BlossomError::Config)?;
                    app.set_theme(theme)?;
                    println!("Theme set to {}", theme);
                }
                None => {
                    let theme = app.preferences().theme;
                    println!("{} ({})", theme, theme.icon());
                }
            }
            Ok(())
        }
        Some(Commands::Private) => {
            let mut app = open_app()?;
            let active = app.toggle_private_mode()?;
            println!("Private mode {}", if active { "on" } else { "off" });
            Ok(())
        }
        Some(Commands::Draft { text, clear }) => {
            let mut app = open_app()?;
            if clear {
                app.clear_input()?;
                println!("Draft cleared");
            } else if !text.is_empty() {
                app.set_input(&text.join(" "));
                app.save_draft()?;
                println!("Draft saved");
            } else if app.input().is_empty() {
                println!("No draft");
            } else {
                print_block(app.input());
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("autosave_delay_ms = {}", config.autosave_delay_ms);
                println!("timestamp_format = {}", config.timestamp_format);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: blossom config [--list | <key> [<value>]]");
                println!("Valid keys: autosave_delay_ms, timestamp_format, created");
                Ok(())
            }
        }
        Some(Commands::Stopwatch) => {
            let mut app = open_app()?;
            app.switch_tab(Tab::Stopwatch);
            println!("{}", STOPWATCH_HELP);

            let events = spawn_line_reader(BufReader::new(io::stdin()), Tab::Stopwatch);
            event_loop::run(&mut app, events, &mut terminal_outputs(), |_| false)?;
            println!();
            Ok(())
        }
        Some(Commands::Timer {
            duration,
            hours,
            minutes,
            seconds,
        }) => {
            let inputs = match duration {
                Some(duration) => TimerInputs::parse_compact(&duration)?,
                None => TimerInputs::parse(
                    hours.as_deref().unwrap_or_default(),
                    minutes.as_deref().unwrap_or_default(),
                    seconds.as_deref().unwrap_or_default(),
                ),
            };

            let mut app = open_app()?;
            app.switch_tab(Tab::Timer);
            app.set_timer_inputs(inputs);
            app.start_timer()?;
            println!("{}", TIMER_HELP);

            let events = spawn_line_reader(BufReader::new(io::stdin()), Tab::Timer);
            event_loop::run(&mut app, events, &mut terminal_outputs(), |app| {
                app.timer().status() == TimerStatus::Complete
            })?;
            println!();
            Ok(())
        }
        None => {
            println!("blossom - Personal diary and time utility");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
