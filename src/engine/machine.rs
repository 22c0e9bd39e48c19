//! The countdown and session-rotation state machine.

use crate::engine::session::SessionKind;
use crate::error::PomoError;

/// Read-only copy of the engine state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    /// Current session kind.
    pub kind: SessionKind,
    /// Whole seconds left in the current session.
    pub remaining_seconds: u32,
    /// Whether the countdown is paused.
    pub paused: bool,
    /// Work sessions completed since the last reset.
    pub completed_work_sessions: u32,
    /// Sequential session counter. Display only; `kind` is the
    /// authoritative rotation signal.
    pub rotation_index: u32,
}

/// Receives a snapshot after every engine state change.
///
/// At most one listener is registered; it is invoked synchronously,
/// exactly once per mutating call (once per consumed second for
/// [`SessionEngine::advance_clock`]).
pub trait StateListener {
    /// Called with the state that resulted from the mutation.
    fn on_change(&mut self, snapshot: &Snapshot);
}

/// Countdown and session-rotation engine.
///
/// Owns the rotation policy and the countdown arithmetic, nothing
/// else. Front-ends feed it wall-clock deltas via
/// [`advance_clock`](Self::advance_clock) and user commands, and read
/// it back through [`snapshot`](Self::snapshot) or a registered
/// [`StateListener`]. Methods must be called sequentially from one
/// thread of control.
pub struct SessionEngine {
    work_secs: u32,
    short_break_secs: u32,
    long_break_secs: u32,
    long_break_every: u32,
    kind: SessionKind,
    remaining: u32,
    paused: bool,
    completed_work_sessions: u32,
    rotation_index: u32,
    /// Fractional seconds not yet consumed by the countdown.
    acc: f64,
    listener: Option<Box<dyn StateListener>>,
}

impl SessionEngine {
    /// Create an engine with the given durations, all in whole seconds.
    ///
    /// The engine starts paused in a work session.
    ///
    /// # Errors
    ///
    /// Returns [`PomoError::InvalidDuration`] if any duration or the
    /// long-break cadence is zero. This indicates a configuration or
    /// programming defect and is not recoverable.
    pub fn new(
        work_secs: u32,
        short_break_secs: u32,
        long_break_secs: u32,
        long_break_every: u32,
    ) -> Result<Self, PomoError> {
        for (name, value) in [
            ("work_secs", work_secs),
            ("short_break_secs", short_break_secs),
            ("long_break_secs", long_break_secs),
            ("long_break_every", long_break_every),
        ] {
            if value == 0 {
                return Err(PomoError::InvalidDuration(format!(
                    "{name} must be positive"
                )));
            }
        }

        Ok(Self {
            work_secs,
            short_break_secs,
            long_break_secs,
            long_break_every,
            kind: SessionKind::Work,
            remaining: work_secs,
            paused: true,
            completed_work_sessions: 0,
            rotation_index: 0,
            acc: 0.0,
            listener: None,
        })
    }

    /// Register the change listener, replacing any existing one.
    pub fn subscribe(&mut self, listener: Box<dyn StateListener>) {
        self.listener = Some(listener);
    }

    /// Reset to a paused work session with zeroed counters.
    pub fn reset(&mut self) {
        self.kind = SessionKind::Work;
        self.remaining = self.work_secs;
        self.paused = true;
        self.completed_work_sessions = 0;
        self.rotation_index = 0;
        self.acc = 0.0;
        self.emit();
    }

    /// Start (or resume) the countdown.
    pub fn start(&mut self) {
        self.paused = false;
        self.emit();
    }

    /// Flip the paused flag.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.emit();
    }

    /// Advance to the next session without waiting for the countdown.
    pub fn skip(&mut self) {
        self.advance_session();
        self.emit();
    }

    /// Feed elapsed wall-clock time into the countdown.
    ///
    /// No-op while paused. Whole seconds are consumed one at a time
    /// from a fractional accumulator, so `remaining_seconds` stays
    /// integral and exactly one snapshot is emitted per elapsed second,
    /// whatever granularity the front-end polls at. A consumed second
    /// at zero remaining performs the rotation advance instead of a
    /// decrement.
    pub fn advance_clock(&mut self, dt: f64) {
        if self.paused {
            return;
        }

        self.acc += dt.max(0.0);
        while self.acc >= 1.0 {
            self.acc -= 1.0;
            if self.remaining > 0 {
                self.remaining -= 1;
            } else {
                self.advance_session();
            }
            self.emit();
        }
    }

    /// Read the current state.
    #[must_use]
    pub const fn snapshot(&self) -> Snapshot {
        Snapshot {
            kind: self.kind,
            remaining_seconds: self.remaining,
            paused: self.paused,
            completed_work_sessions: self.completed_work_sessions,
            rotation_index: self.rotation_index,
        }
    }

    /// Rotate to the next session.
    ///
    /// Leaving a work session counts it; every `long_break_every`th
    /// completed work session is followed by a long break, otherwise a
    /// short one. Leaving any break returns to work.
    fn advance_session(&mut self) {
        if self.kind == SessionKind::Work {
            self.completed_work_sessions += 1;
            if self.completed_work_sessions % self.long_break_every == 0 {
                self.kind = SessionKind::LongBreak;
                self.remaining = self.long_break_secs;
            } else {
                self.kind = SessionKind::ShortBreak;
                self.remaining = self.short_break_secs;
            }
        } else {
            self.kind = SessionKind::Work;
            self.remaining = self.work_secs;
        }
        self.rotation_index += 1;
    }

    fn emit(&mut self) {
        let snapshot = self.snapshot();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_change(&snapshot);
        }
    }
}
