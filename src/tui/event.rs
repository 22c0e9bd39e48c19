//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::PomoError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start (or resume) the countdown.
    Start,
    /// Toggle pause.
    TogglePause,
    /// Skip to the next session.
    Skip,
    /// Reset the engine.
    Reset,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. The key
/// bindings mirror the windowed build's hotkeys and honor the
/// `ui.hotkeys` config flag; quitting always works.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &App, timeout: Duration) -> Result<Option<Action>, PomoError> {
    // Poll with the configured tick interval so the countdown keeps
    // moving while no key is pressed.
    if !event::poll(timeout)
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        return Ok(Some(Action::Quit));
    }

    if !app.config.ui.hotkeys {
        return Ok(None);
    }

    match key.code {
        KeyCode::Enter => Ok(Some(Action::Start)),
        KeyCode::Char(' ' | 'p') => Ok(Some(Action::TogglePause)),
        KeyCode::Char('s') => Ok(Some(Action::Skip)),
        KeyCode::Char('r') => Ok(Some(Action::Reset)),
        _ => Ok(None),
    }
}
