//! Optional color theme for the TUI.
//!
//! The stylesheet analog of the windowed build: colors are read from
//! the JSON file named by `ui.theme_file`. A missing or malformed file
//! is never an error; the default palette is used instead.

use std::path::Path;

use ratatui::style::Color;
use serde::Deserialize;

use crate::engine::SessionKind;

/// Color names for the TUI.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Color for work sessions.
    pub work: String,
    /// Color for short breaks.
    pub short_break: String,
    /// Color for long breaks.
    pub long_break: String,
    /// Color for borders and the progress gauge.
    pub accent: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            work: "red".to_string(),
            short_break: "green".to_string(),
            long_break: "blue".to_string(),
            accent: "cyan".to_string(),
        }
    }
}

impl Theme {
    /// Load a theme file, falling back to the default palette if the
    /// file is missing or malformed.
    #[must_use]
    pub fn load(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|contents| serde_json::from_str(&contents).ok())
            .unwrap_or_default()
    }

    /// Color for the given session kind.
    #[must_use]
    pub fn kind_color(&self, kind: SessionKind) -> Color {
        match kind {
            SessionKind::Work => parse_color(&self.work),
            SessionKind::ShortBreak => parse_color(&self.short_break),
            SessionKind::LongBreak => parse_color(&self.long_break),
        }
    }

    /// Accent color for borders and the gauge.
    #[must_use]
    pub fn accent_color(&self) -> Color {
        parse_color(&self.accent)
    }
}

/// Map a color name to a terminal color, defaulting to white.
fn parse_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        _ => Color::White,
    }
}
