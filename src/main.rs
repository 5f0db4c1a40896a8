mod app;
mod input;
mod ui;

use std::env;
use std::fs::{self, File};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use card_indicator::config::{self, AppConfig};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::app::App;

fn main() -> Result<()> {
    let config_path = parse_args();
    let config = match &config_path {
        Some(path) => config::load_config(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };
    let log_path = init_tracing(&config)?;
    info!(
        config = ?config_path,
        log = %log_path.display(),
        pages = config.pages,
        cap = %config.indicator.indicators_to_show,
        "Starting card-indicator"
    );

    // Set up terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run(&mut terminal, &config);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(ref e) = result {
        error!("{:?}", e);
    }
    result
}

/// Config path from the first argument, else the user config directory
fn parse_args() -> Option<PathBuf> {
    env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(config::default_config_path)
}

/// Log to a file; the terminal belongs to the UI.
fn init_tracing(config: &AppConfig) -> Result<PathBuf> {
    let dir = dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("card-indicator");
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let path = dir.join("card-indicator.log");
    let file = File::create(&path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_writer(Mutex::new(file))
                .with_filter(env_filter),
        )
        .init();
    Ok(path)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, config: &AppConfig) -> Result<()> {
    let mut app = App::new(config);

    loop {
        // Draw the UI
        terminal.draw(|frame| ui::render(frame, &app))?;

        // Check if we should quit
        if app.should_quit {
            break;
        }

        // Handle events
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    input::handle_key(&mut app, key);
                }
            }
        }
    }

    info!("Exiting");
    Ok(())
}
