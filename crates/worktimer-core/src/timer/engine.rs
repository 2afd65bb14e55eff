//! Session engine implementation.
//!
//! The engine is a wall-clock-based state machine. It does not use internal
//! threads - the caller is responsible for calling `tick()` periodically.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Running -> (Idle | Completed)
//! ```
//!
//! While Running the engine moves from the workout phase into the rest phase
//! on its own; `stop()` cancels whichever countdown is active and rewinds.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::session::{Phase, Session};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Running,
    Completed,
}

/// Core session engine.
///
/// Operates on wall-clock deltas -- no internal thread.
/// The caller is responsible for calling `tick()` periodically.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionEngine {
    session: Session,
    state: SessionState,
    /// 0 = workout phase, 1 = rest phase.
    phase_index: usize,
    /// Remaining time in milliseconds for the current phase.
    remaining_ms: u64,
    /// Timestamp (ms since epoch) when the engine last accounted for
    /// elapsed time. Used to compute wall-clock deltas between ticks.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
}

impl SessionEngine {
    /// Create a new engine for the given session.
    ///
    /// Starts in the `Idle` state, positioned on the workout phase.
    pub fn new(session: Session) -> Self {
        let remaining_ms = session.phases()[0].duration_ms();
        Self {
            session,
            state: SessionState::Idle,
            phase_index: 0,
            remaining_ms,
            last_tick_epoch_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phases()[self.phase_index].phase
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    /// Remaining whole seconds, rounded up: a 3-second phase reads 3,2,1,0.
    pub fn remaining_secs(&self) -> u64 {
        self.remaining_ms.div_ceil(1000)
    }

    /// Duration of the current phase in milliseconds.
    pub fn total_ms(&self) -> u64 {
        self.session.phases()[self.phase_index].duration_ms()
    }

    /// 0.0 .. 1.0 elapsed fraction of the current phase.
    pub fn phase_progress(&self) -> f64 {
        let total = self.total_ms();
        if total == 0 {
            return 1.0;
        }
        1.0 - (self.remaining_ms as f64 / total as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            phase: self.phase(),
            remaining_ms: self.remaining_ms,
            total_ms: self.total_ms(),
            phase_progress: self.phase_progress(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Begin the session from the workout phase.
    ///
    /// No-op while already running.
    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            SessionState::Idle | SessionState::Completed => {
                self.rewind();
                self.state = SessionState::Running;
                self.last_tick_epoch_ms = Some(now_ms());
                debug!(
                    workout_secs = self.session.workout_secs(),
                    rest_secs = self.session.rest_secs(),
                    "session started"
                );
                Some(Event::SessionStarted {
                    workout_secs: self.session.workout_secs(),
                    rest_secs: self.session.rest_secs(),
                    at: Utc::now(),
                })
            }
            SessionState::Running => None, // Already running.
        }
    }

    /// Cancel the active countdown and rewind to Idle.
    ///
    /// Returns the phase and remaining time at the moment of cancellation.
    pub fn stop(&mut self) -> Option<Event> {
        if self.state != SessionState::Running {
            return None;
        }
        self.flush_elapsed();
        let phase = self.phase();
        let remaining_ms = self.remaining_ms;
        debug!(phase = phase.label(), remaining_ms, "session stopped");
        self.state = SessionState::Idle;
        self.rewind();
        Some(Event::SessionStopped {
            phase,
            remaining_ms,
            at: Utc::now(),
        })
    }

    /// Call periodically. Returns `Some(Event::PhaseCompleted)` when the
    /// current phase reaches zero: once for the workout (the engine then
    /// runs the rest phase) and once for the rest (the engine is Completed).
    pub fn tick(&mut self) -> Option<Event> {
        if self.state != SessionState::Running {
            return None;
        }
        self.flush_elapsed();
        if self.remaining_ms > 0 {
            return None;
        }
        let completed = self.phase();
        match completed {
            Phase::Workout => {
                self.phase_index = 1;
                self.remaining_ms = self.session.phases()[1].duration_ms();
                debug!("workout phase complete, entering rest");
            }
            Phase::Rest => {
                self.state = SessionState::Completed;
                self.last_tick_epoch_ms = None;
                debug!("rest phase complete, session finished");
            }
        }
        Some(Event::PhaseCompleted {
            phase: completed,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn flush_elapsed(&mut self) {
        if let Some(last) = self.last_tick_epoch_ms {
            let now = now_ms();
            let elapsed = now.saturating_sub(last);
            self.remaining_ms = self.remaining_ms.saturating_sub(elapsed);
            self.last_tick_epoch_ms = Some(now);
        }
    }

    fn rewind(&mut self) {
        self.phase_index = 0;
        self.remaining_ms = self.session.phases()[0].duration_ms();
        self.last_tick_epoch_ms = None;
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
