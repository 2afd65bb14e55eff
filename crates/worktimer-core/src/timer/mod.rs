mod engine;
mod session;

pub use engine::{SessionEngine, SessionState};
pub use session::{Phase, PhaseSpec, Session, MAX_PHASE_SECS};
