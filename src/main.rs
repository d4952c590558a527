use std::io;

use anyhow::Context;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use pokedex_explorer::config::AppConfig;
use pokedex_explorer::core::logging;
use pokedex_explorer::tui::app::AppState;
use pokedex_explorer::tui::services::Services;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Initialize logging
    let _log_guard = logging::init(&config);
    log::info!("{} v{} starting", pokedex_explorer::NAME, pokedex_explorer::VERSION);
    if let Some(e) = config_error {
        log::warn!("{e}; using defaults");
    }
    let tick_rate = config.tui.tick_rate();

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let services = Services::init(&config, event_tx).context("invalid catalog configuration")?;
    let mut app = AppState::new(event_rx, services, &config.tui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::info!("Exiting");
    result.context("event loop failed")
}
