use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use lunchspin::app::App;
use lunchspin::cli::Cli;
use lunchspin::config::Config;
use lunchspin::logging;
use lunchspin::provider::spawn_worker;

/// How long to block on input before a housekeeping pass
const POLL_INTERVAL: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    logging::init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let mut app = App::new(&config);
    if let Some(mode) = cli.mode {
        app.set_mode(mode.into());
    }

    let (request_tx, response_rx) = spawn_worker(&config.provider);
    app.set_channels(request_tx, response_rx);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Short poll so worker responses and spin ticks keep flowing even
        // when the keyboard is quiet
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }

        app.on_tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
