//! Rewind - tic-tac-toe with time travel, in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use rewind_tui::{App, Cli, TerminalGuard, TuiConfig};
use std::io;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = TuiConfig::load_or_default(&cli.config)?
        .with_overrides(cli.log_file, cli.descending);

    init_tracing(&config)?;
    info!("Starting Rewind TUI");

    // Dropped last, so the terminal is restored on every return below.
    let _guard = TerminalGuard::enter(io::stdout())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(&config);
    let res = run(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.game().latest_step(), "Exiting");

    res
}

/// Logs to a file so output never lands on the alternate screen.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Draw, wait for one event, apply it; until the user quits.
#[instrument(skip_all)]
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let frame = terminal.draw(|f| rewind_tui::draw(f, app))?;
        app.set_screen(frame.area);

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            // Resizes only need the redraw at the top of the loop.
            _ => {}
        }
    }
    Ok(())
}
