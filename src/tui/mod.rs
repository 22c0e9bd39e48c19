//! Terminal User Interface (TUI) for pomo.
//!
//! The full-screen front-end, standing in for the windowed build of
//! the original timer. Built with ratatui and crossterm.

mod app;
mod event;
mod theme;
mod ui;

pub use app::App;
pub use theme::Theme;

use std::io;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::engine::SessionEngine;
use crate::error::PomoError;

/// Run the TUI front-end.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(engine: SessionEngine, config: Config) -> Result<(), PomoError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(engine, config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    let timeout = Duration::from_millis(app.config.ui.tick_ms);

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                event::Action::Quit => break,
                event::Action::Start => app.start(),
                event::Action::TogglePause => app.toggle_pause(),
                event::Action::Skip => app.skip(),
                event::Action::Reset => app.reset(),
            }
        }

        // Feed elapsed wall-clock time into the engine
        app.tick();
    }

    Ok(())
}
