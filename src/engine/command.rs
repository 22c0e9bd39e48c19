//! User commands, decoupled from the input method.

/// A command controlling the engine, whatever the input source
/// (prompt line, single keypress, or TUI keybinding).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Proceed with the next session.
    Continue,
    /// Flip the paused flag.
    PauseToggle,
    /// Skip to the next session.
    Skip,
    /// Stop driving the engine.
    Quit,
}

impl Command {
    /// Parse a terminal input line.
    ///
    /// Empty input means continue. Unrecognized input returns `None`
    /// so the caller can re-prompt.
    #[must_use]
    pub fn parse_line(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "" => Some(Self::Continue),
            "p" => Some(Self::PauseToggle),
            "s" => Some(Self::Skip),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }

    /// Map a single keypress to a command.
    ///
    /// Unlike [`parse_line`](Self::parse_line) there is no notion of
    /// empty input; unmapped keys return `None` and are ignored.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'p' | ' ' => Some(Self::PauseToggle),
            's' => Some(Self::Skip),
            'q' => Some(Self::Quit),
            _ => None,
        }
    }
}
