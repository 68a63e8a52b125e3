mod app;
mod domain;
mod input;
mod logging;
mod persistence;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{ensure_dir, get_data_dir, init_local_data_dir, load_or_default, log_dir, tasks_file, FileStore};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// How long to wait for a key before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "today")]
#[command(about = "A small terminal task list: add, complete and delete today's tasks", long_about = None)]
struct Cli {
    /// Use this directory for task storage instead of .today / ~/.today
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .today directory in the current directory
    Init,
    /// Print the task list and exit
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let current_dir = std::env::current_dir()?;
            let data_dir = init_local_data_dir(&current_dir)?;
            println!("Initialized today directory: {}", data_dir.display());
            println!();
            println!("Tasks for this directory (and below) will now be stored there.");
            Ok(())
        }
        Some(Commands::List) => {
            let data_dir = get_data_dir(cli.data_dir.as_deref())?;
            let store = FileStore::new(tasks_file(&data_dir));
            let tasks = load_or_default(&store);
            print!("{}", ui::plain::format_plain(&tasks));
            Ok(())
        }
        None => run_tui(cli.data_dir, cli.verbose),
    }
}

fn run_tui(data_dir: Option<PathBuf>, verbose: bool) -> Result<()> {
    let data_dir = get_data_dir(data_dir.as_deref())?;
    ensure_dir(&data_dir)?;

    // Logging failure is not fatal, the list still works without it
    let _logger = match logging::init_logging(logging::level_for(verbose), &log_dir(&data_dir)) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {:#}", e);
            None
        }
    };

    let store = FileStore::new(tasks_file(&data_dir));
    log::info!("using task file {}", store.path().display());
    let mut app = AppState::load(Box::new(store));

    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, &mut app);

    let restored = restore_terminal(&mut terminal);

    if let Err(err) = &result {
        log::error!("session ended with error: {:#}", err);
    }
    log::info!("event=app_exit tasks={}", app.tasks.len());

    restored?;
    result
}

/// Leave raw mode and the alternate screen, attempting every step before reporting a failure
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

/// Enter raw mode and the alternate screen, undoing both if any step fails
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;

    let setup = || -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout))?)
    };

    undo_on_err(setup(), || {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    })
}

/// Run `undo` when `result` is an error, then pass the result through
fn undo_on_err<T>(result: Result<T>, undo: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_undo_on_err_runs_undo_on_failure() {
        let undone = Cell::new(false);
        let result: Result<()> = undo_on_err(Err(anyhow::anyhow!("no tty")), || undone.set(true));

        assert!(result.is_err());
        assert!(undone.get());
    }

    #[test]
    fn test_undo_on_err_skips_undo_on_success() {
        let undone = Cell::new(false);
        let result = undo_on_err(Ok(7), || undone.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!undone.get());
    }
}
