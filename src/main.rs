mod app;
mod domain;
mod i18n;
mod input;
mod persistence;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::TaskStore;
use persistence::{
    ensure_petal_dir, get_petal_dir, init_local_petal, load_session, load_settings,
    session_file, settings_file, users_file, JsonUserDirectory,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "petal")]
#[command(about = "A friendly terminal task manager with categories, calendar, and time tracking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .petal directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            let petal_dir = init_local_petal()?;
            println!("Initialized petal directory: {}", petal_dir.display());
            println!();
            println!("Petal will now use this local directory for settings and accounts.");
            println!("Run 'petal' to start managing tasks.");
            Ok(())
        }
        None => run_tui(),
    }
}

fn run_tui() -> Result<()> {
    // Ensure petal directory exists
    ensure_petal_dir()?;

    let petal_dir = get_petal_dir()?;
    eprintln!("Using petal directory: {}", petal_dir.display());

    // Load persisted settings, accounts, and session
    let settings_path = settings_file()?;
    let session_path = session_file()?;
    let settings = load_settings(&settings_path)?;
    let users = JsonUserDirectory::open(users_file()?)?;
    let session = load_session(&session_path)?;

    // Tasks are session-only; start from the demo collection
    let store = TaskStore::sample();

    let mut app = AppState::new(store, settings, users, session, settings_path, session_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save settings on exit if they changed
    if app.settings_dirty {
        if let Err(e) = app.save_settings() {
            eprintln!("Error saving settings: {}", e);
        }
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;
                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Tick the stopwatch display
        app.tick();
    }
}
