//! # Workout Module
//!
//! Everything the home and catalog screens show or drive:
//!
//! - [`plan`] - the fixed daily plan plus the static home widgets
//! - [`session`] - the countdown / exercise-index state machine
//! - [`ticker`] - the recurring one-second tick feeding the session
//! - [`catalog`] - the static workout list and its time-of-day filter

pub mod catalog;
pub mod plan;
pub mod session;
pub mod ticker;

pub use catalog::{catalog, filter_catalog, CatalogEntry, CategoryFilter, Difficulty, TimeOfDay};
pub use plan::{Exercise, WorkoutPlan, SESSION_LENGTH_SECS};
pub use session::{format_clock, SessionTimer, TickOutcome};
pub use ticker::{SessionTick, TickScheduler, Ticker, TICK_PERIOD};
