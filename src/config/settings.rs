//! Configuration settings for pomo.
//!
//! Settings are loaded from a JSON file, `config.json` by default. A
//! missing file means defaults; a present file is merged field-by-field
//! over the defaults and validated before any front-end starts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PomoError;

/// Upper bound for session lengths. Keeps the minutes-to-seconds
/// conversion well inside `u32` and the display inside `HH:MM:SS`.
const MAX_SESSION_MINUTES: u32 = 24 * 60;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Work session length in minutes.
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    /// Short break length in minutes.
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    /// Long break length in minutes.
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    /// Completed work sessions between long breaks.
    #[serde(default = "default_long_break_every")]
    pub long_break_every: u32,
    /// UI settings.
    pub ui: UiConfig,
}

/// UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme file. A missing file falls back to the default
    /// palette.
    #[serde(default = "default_theme_file")]
    pub theme_file: String,
    /// Title shown in the TUI header.
    #[serde(default = "default_window_title")]
    pub window_title: String,
    /// Keep the window above others. Accepted for compatibility with
    /// the windowed build; a terminal cannot honor it.
    #[serde(default)]
    pub always_on_top: bool,
    /// Window opacity in [0.2, 1.0]. Accepted for compatibility with
    /// the windowed build; a terminal cannot honor it.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// How often the front-end polls input and feeds the clock, in
    /// milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Enable control hotkeys beyond quit.
    #[serde(default = "default_true")]
    pub hotkeys: bool,
}

// Default value functions for serde
const fn default_work_minutes() -> u32 {
    25
}

const fn default_short_break_minutes() -> u32 {
    5
}

const fn default_long_break_minutes() -> u32 {
    15
}

const fn default_long_break_every() -> u32 {
    4
}

fn default_theme_file() -> String {
    "theme.json".to_string()
}

fn default_window_title() -> String {
    "Pomodoro".to_string()
}

const fn default_opacity() -> f64 {
    1.0
}

const fn default_tick_ms() -> u64 {
    100
}

const fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            long_break_every: default_long_break_every(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_file: default_theme_file(),
            window_title: default_window_title(),
            always_on_top: false,
            opacity: default_opacity(),
            tick_ms: default_tick_ms(),
            hotkeys: default_true(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns the default
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed, or if any value is out of range.
    pub fn load_from_path(path: &Path) -> Result<Self, PomoError> {
        let config = if path.exists() {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                PomoError::Config(format!(
                    "Failed to read config file {}: {e}",
                    path.display()
                ))
            })?;

            serde_json::from_str::<Self>(&contents).map_err(|e| {
                PomoError::Config(format!(
                    "Failed to parse config file {}: {e}",
                    path.display()
                ))
            })?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate value ranges.
    ///
    /// # Errors
    ///
    /// Returns a descriptive [`PomoError::Config`] for the first
    /// out-of-range value found.
    pub fn validate(&self) -> Result<(), PomoError> {
        for (name, value) in [
            ("work_minutes", self.work_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
            ("long_break_every", self.long_break_every),
        ] {
            if value == 0 {
                return Err(PomoError::Config(format!(
                    "{name} must be a positive integer"
                )));
            }
        }

        for (name, value) in [
            ("work_minutes", self.work_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
        ] {
            if value > MAX_SESSION_MINUTES {
                return Err(PomoError::Config(format!(
                    "{name} must be at most {MAX_SESSION_MINUTES}"
                )));
            }
        }

        if !(0.2..=1.0).contains(&self.ui.opacity) {
            return Err(PomoError::Config(
                "ui.opacity must be between 0.2 and 1.0".to_string(),
            ));
        }

        if self.ui.tick_ms == 0 {
            return Err(PomoError::Config(
                "ui.tick_ms must be a positive integer".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.work_minutes, 25);
        assert_eq!(config.short_break_minutes, 5);
        assert_eq!(config.long_break_minutes, 15);
        assert_eq!(config.long_break_every, 4);
        assert_eq!(config.ui.window_title, "Pomodoro");
        assert_eq!(config.ui.tick_ms, 100);
        assert!(config.ui.hotkeys);
        assert!(!config.ui.always_on_top);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.work_minutes, 25);
    }

    #[test]
    fn test_partial_config_merges_over_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let partial_json = r#"
{
    "work_minutes": 50,
    "ui": { "tick_ms": 250 }
}
"#;
        std::fs::write(&config_path, partial_json).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.work_minutes, 50);
        assert_eq!(config.ui.tick_ms, 250);
        // Defaults should be used for missing fields
        assert_eq!(config.short_break_minutes, 5);
        assert_eq!(config.ui.window_title, "Pomodoro");
    }

    #[test]
    fn test_zero_duration_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"work_minutes": 0}"#).unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("work_minutes"));
    }

    #[test]
    fn test_oversized_duration_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"work_minutes": 100000000}"#).unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("work_minutes"));
    }

    #[test]
    fn test_max_session_minutes_accepted() {
        let mut config = Config::default();
        config.long_break_minutes = MAX_SESSION_MINUTES;
        assert!(config.validate().is_ok());
        // The seconds conversion at this bound stays inside u32.
        assert!(MAX_SESSION_MINUTES.checked_mul(60).is_some());
    }

    #[test]
    fn test_out_of_range_opacity_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"ui": {"opacity": 1.5}}"#).unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("opacity"));
    }

    #[test]
    fn test_zero_tick_ms_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"ui": {"tick_ms": 0}}"#).unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("tick_ms"));
    }

    #[test]
    fn test_wrong_typed_value_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, r#"{"work_minutes": 2.5}"#).unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(&config_path, "not json").unwrap();

        assert!(Config::load_from_path(&config_path).is_err());
    }
}
