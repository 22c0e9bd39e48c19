//! Single-line live countdown with non-blocking key control.
//!
//! The polling variant: the terminal goes into raw mode, keypresses
//! are polled with the configured tick interval, and measured
//! wall-clock deltas drive the engine, so the countdown keeps running
//! while keys are handled.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use colored::Colorize;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    terminal::{disable_raw_mode, enable_raw_mode, Clear, ClearType},
};

use crate::config::Config;
use crate::engine::{format_mmss, Command, SessionEngine, Snapshot};
use crate::error::PomoError;
use crate::frontend::keys::{KeypressSource, TerminalKeys};

/// Run the watch front-end until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be put into raw mode or if
/// polling fails.
pub fn run(mut engine: SessionEngine, config: &Config) -> Result<(), PomoError> {
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;

    let result = watch_loop(&mut engine, config, &mut TerminalKeys);

    disable_raw_mode().ok();
    println!();
    result
}

/// The polling loop, separated from terminal setup so it can be driven
/// by a scripted keypress source in tests.
fn watch_loop(
    engine: &mut SessionEngine,
    config: &Config,
    keys: &mut dyn KeypressSource,
) -> Result<(), PomoError> {
    let timeout = Duration::from_millis(config.ui.tick_ms);
    let mut last = Instant::now();

    engine.start();
    render(engine)?;

    loop {
        if let Some(key) = keys.poll_key(timeout)? {
            if key == 'r' {
                engine.reset();
            } else if let Some(cmd) = Command::from_key(key) {
                match cmd {
                    Command::Quit => return Ok(()),
                    Command::PauseToggle => engine.toggle_pause(),
                    Command::Skip => engine.skip(),
                    Command::Continue => {}
                }
            }
        }

        let now = Instant::now();
        engine.advance_clock(now.duration_since(last).as_secs_f64());
        last = now;

        render(engine)?;
    }
}

/// Redraw the status line in place.
///
/// The rest of the line is cleared after writing so a shrinking line
/// (the paused marker going away) leaves no stale characters behind.
fn render(engine: &SessionEngine) -> Result<(), PomoError> {
    let line = status_line(&engine.snapshot());

    let mut stdout = io::stdout();
    queue!(stdout, MoveToColumn(0))
        .and_then(|()| write!(stdout, "{line}"))
        .and_then(|()| queue!(stdout, Clear(ClearType::UntilNewLine)))
        .and_then(|()| stdout.flush())
        .map_err(|e| PomoError::Terminal(format!("Failed to write status line: {e}")))
}

/// Build the status line for a snapshot.
fn status_line(snap: &Snapshot) -> String {
    let paused = if snap.paused { " [paused]" } else { "" };

    format!(
        "{} {}  done: {}{}   p=pause s=skip r=reset q=quit ",
        snap.kind.display_name().to_uppercase().bold(),
        format_mmss(i64::from(snap.remaining_seconds)),
        snap.completed_work_sessions,
        paused.yellow(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SessionKind;
    use crate::frontend::keys::MockKeypressSource;
    use mockall::Sequence;

    fn test_engine() -> SessionEngine {
        SessionEngine::new(120, 60, 180, 4).unwrap()
    }

    #[test]
    fn test_quits_on_q() {
        let mut keys = MockKeypressSource::new();
        keys.expect_poll_key()
            .times(1)
            .returning(|_| Ok(Some('q')));

        let mut engine = test_engine();
        watch_loop(&mut engine, &Config::default(), &mut keys).unwrap();
    }

    #[test]
    fn test_pause_then_quit() {
        let mut keys = MockKeypressSource::new();
        let mut seq = Sequence::new();
        keys.expect_poll_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some('p')));
        keys.expect_poll_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some('q')));

        let mut engine = test_engine();
        watch_loop(&mut engine, &Config::default(), &mut keys).unwrap();

        assert!(engine.snapshot().paused);
    }

    #[test]
    fn test_skip_advances_session() {
        let mut keys = MockKeypressSource::new();
        let mut seq = Sequence::new();
        keys.expect_poll_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some('s')));
        keys.expect_poll_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some('q')));

        let mut engine = test_engine();
        watch_loop(&mut engine, &Config::default(), &mut keys).unwrap();

        assert_eq!(engine.snapshot().kind, SessionKind::ShortBreak);
    }

    #[test]
    fn test_reset_restores_paused_work_session() {
        let mut keys = MockKeypressSource::new();
        let mut seq = Sequence::new();
        keys.expect_poll_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some('s')));
        keys.expect_poll_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some('r')));
        keys.expect_poll_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some('q')));

        let mut engine = test_engine();
        watch_loop(&mut engine, &Config::default(), &mut keys).unwrap();

        let snap = engine.snapshot();
        assert_eq!(snap.kind, SessionKind::Work);
        assert_eq!(snap.remaining_seconds, 120);
        assert!(snap.paused);
        assert_eq!(snap.completed_work_sessions, 0);
    }

    #[test]
    fn test_status_line_paused_marker_toggles() {
        let mut engine = test_engine();
        engine.start();
        assert!(!status_line(&engine.snapshot()).contains("[paused]"));

        engine.toggle_pause();
        assert!(status_line(&engine.snapshot()).contains("[paused]"));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let mut keys = MockKeypressSource::new();
        let mut seq = Sequence::new();
        keys.expect_poll_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some('z')));
        keys.expect_poll_key()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some('q')));

        let mut engine = test_engine();
        watch_loop(&mut engine, &Config::default(), &mut keys).unwrap();

        assert_eq!(engine.snapshot().kind, SessionKind::Work);
    }
}
