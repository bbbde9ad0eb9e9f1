//! FitLazy TUI - a terminal fitness companion
//!
//! This library provides the onboarding wizard, the daily session timer and
//! the workout catalog, plus the terminal screens that drive them.

pub mod onboarding;
pub mod profile;
pub mod ui;
pub mod workout;
