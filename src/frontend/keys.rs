//! Non-blocking keyboard input.
//!
//! The engine never reads input itself. Front-ends that need live
//! keypress control go through this capability so the platform details
//! stay out of the countdown logic.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::PomoError;

/// Source of single keypresses.
#[cfg_attr(test, mockall::automock)]
pub trait KeypressSource {
    /// Wait up to `timeout` for a keypress.
    ///
    /// Returns the pressed character, lowercased, or `None` if the
    /// timeout elapsed without input.
    ///
    /// # Errors
    ///
    /// Returns an error if event polling fails.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<char>, PomoError>;
}

/// Keypress source backed by crossterm events.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeypressSource for TerminalKeys {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<char>, PomoError> {
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

        // Ctrl+C and Esc both surface as the quit key.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Ok(Some('q'));
        }

        match key.code {
            KeyCode::Char(c) => Ok(Some(c.to_ascii_lowercase())),
            KeyCode::Esc => Ok(Some('q')),
            _ => Ok(None),
        }
    }
}
