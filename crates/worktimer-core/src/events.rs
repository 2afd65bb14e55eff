use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Phase, SessionState};

/// Every state change in the engine produces an Event.
/// The CLI renders them; `--json` mode prints them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    SessionStarted {
        workout_secs: u64,
        rest_secs: u64,
        at: DateTime<Utc>,
    },
    /// A phase countdown reached zero. Fired once for the workout phase and
    /// once for the rest phase; the alert sounds on each.
    PhaseCompleted {
        phase: Phase,
        at: DateTime<Utc>,
    },
    /// The active countdown was cancelled by the user.
    SessionStopped {
        phase: Phase,
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: SessionState,
        phase: Phase,
        remaining_ms: u64,
        total_ms: u64,
        phase_progress: f64,
        at: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_tagged_by_type() {
        let event = Event::PhaseCompleted {
            phase: Phase::Workout,
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"PhaseCompleted\""));
        assert!(json.contains("\"phase\":\"workout\""));
    }

    #[test]
    fn stopped_event_roundtrips() {
        let event = Event::SessionStopped {
            phase: Phase::Rest,
            remaining_ms: 1500,
            at: Utc::now(),
        };
        let json = serde_json::to_string(&event).unwrap();
        match serde_json::from_str::<Event>(&json).unwrap() {
            Event::SessionStopped {
                phase,
                remaining_ms,
                ..
            } => {
                assert_eq!(phase, Phase::Rest);
                assert_eq!(remaining_ms, 1500);
            }
            other => panic!("Expected SessionStopped, got {other:?}"),
        }
    }
}
