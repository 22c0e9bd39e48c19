//! Application state for the TUI.

use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::engine::{SessionEngine, SessionKind, Snapshot};
use crate::tui::theme::Theme;

/// Application state.
///
/// Owns the engine and drives it from measured wall-clock deltas; the
/// render layer only ever sees snapshots.
pub struct App {
    engine: SessionEngine,
    /// Loaded configuration.
    pub config: Config,
    /// Color theme.
    pub theme: Theme,
    /// When the clock was last fed.
    last_tick: Instant,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(engine: SessionEngine, config: Config) -> Self {
        let theme = Theme::load(Path::new(&config.ui.theme_file));

        Self {
            engine,
            config,
            theme,
            last_tick: Instant::now(),
        }
    }

    /// Feed elapsed wall-clock time into the engine.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.engine
            .advance_clock(now.duration_since(self.last_tick).as_secs_f64());
        self.last_tick = now;
    }

    /// Read the current engine state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Start (or resume) the countdown.
    pub fn start(&mut self) {
        self.engine.start();
    }

    /// Flip the paused flag.
    pub fn toggle_pause(&mut self) {
        self.engine.toggle_pause();
    }

    /// Skip to the next session.
    pub fn skip(&mut self) {
        self.engine.skip();
    }

    /// Reset to a paused work session.
    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Full length of the current session kind, in seconds.
    #[must_use]
    pub fn session_total_seconds(&self) -> u32 {
        let minutes = match self.snapshot().kind {
            SessionKind::Work => self.config.work_minutes,
            SessionKind::ShortBreak => self.config.short_break_minutes,
            SessionKind::LongBreak => self.config.long_break_minutes,
        };
        minutes * 60
    }

    /// Progress through the current session (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.session_total_seconds());
        if total <= 0.0 {
            return 1.0;
        }
        (1.0 - f64::from(self.snapshot().remaining_seconds) / total).clamp(0.0, 1.0)
    }
}
