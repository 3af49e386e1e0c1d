use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

use promptmagic::app::App;
use promptmagic::cli::Cli;
use promptmagic::config;

/// How long to wait for input before running a tick
const TICK_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load(cli.config.as_deref())?;

    let app = App::new(app_config, &cli);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Poll with a timeout so the debouncer and worker channels are
        // serviced even while the keyboard is idle
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (avoid duplicates)
                if key.kind == KeyEventKind::Press {
                    app.handle_key_event(key);
                }
            }
        }

        app.tick();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
