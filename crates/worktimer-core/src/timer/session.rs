use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound for a single phase duration (24 hours).
pub const MAX_PHASE_SECS: u64 = 86_400;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Workout,
    Rest,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Workout => "workout",
            Phase::Rest => "rest",
        }
    }
}

/// A phase together with its duration in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhaseSpec {
    pub phase: Phase,
    pub duration_secs: u64,
}

impl PhaseSpec {
    /// Phase duration in milliseconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_ms(&self) -> u64 {
        self.duration_secs.saturating_mul(1000)
    }
}

/// A validated workout/rest duration pair.
///
/// The workout must run for at least one second; a rest of zero is allowed
/// and completes on the first tick after the workout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Session {
    workout_secs: u64,
    rest_secs: u64,
}

impl Session {
    pub fn new(workout_secs: u64, rest_secs: u64) -> Result<Self, ValidationError> {
        if workout_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "workout_secs".into(),
                message: "must be at least 1 second".into(),
            });
        }
        if workout_secs > MAX_PHASE_SECS {
            return Err(ValidationError::InvalidValue {
                field: "workout_secs".into(),
                message: format!("must be at most {MAX_PHASE_SECS} seconds"),
            });
        }
        if rest_secs > MAX_PHASE_SECS {
            return Err(ValidationError::InvalidValue {
                field: "rest_secs".into(),
                message: format!("must be at most {MAX_PHASE_SECS} seconds"),
            });
        }
        Ok(Self {
            workout_secs,
            rest_secs,
        })
    }

    pub fn workout_secs(&self) -> u64 {
        self.workout_secs
    }

    pub fn rest_secs(&self) -> u64 {
        self.rest_secs
    }

    /// The two phases of the session, in running order.
    pub fn phases(&self) -> [PhaseSpec; 2] {
        [
            PhaseSpec {
                phase: Phase::Workout,
                duration_secs: self.workout_secs,
            },
            PhaseSpec {
                phase: Phase::Rest,
                duration_secs: self.rest_secs,
            },
        ]
    }

    pub fn total_secs(&self) -> u64 {
        self.workout_secs.saturating_add(self.rest_secs)
    }
}
