//! # Worktimer Core Library
//!
//! Core logic for worktimer, a two-phase interval timer: a workout
//! countdown followed by a rest countdown, with an alert at each phase
//! transition. The CLI binary is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Session Engine**: a wall-clock-based state machine that requires the
//!   caller to periodically invoke `tick()` for progress updates
//! - **Config**: read-only TOML configuration for default durations and
//!   notification preferences
//!
//! ## Key Components
//!
//! - [`Session`]: validated workout/rest duration pair
//! - [`SessionEngine`]: core timer state machine
//! - [`Event`]: state changes emitted by the engine
//! - [`Config`]: application configuration

pub mod config;
pub mod error;
pub mod events;
pub mod timer;

pub use config::{config_path, Config};
pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use timer::{Phase, PhaseSpec, Session, SessionEngine, SessionState};
