//! # Session Timer
//!
//! State machine behind the "start workout" button on the home screen.
//!
//! A session is a single countdown of [`SESSION_LENGTH_SECS`] plus an index
//! into the plan's exercises. The two are deliberately independent: the
//! countdown never moves the exercise index, only [`SessionTimer::next_exercise`]
//! does. Per-exercise timing is not enforced.
//!
//! The timer does not schedule anything itself. The owner feeds it one
//! [`SessionTimer::tick`] per second while [`SessionTimer::needs_ticks`] holds
//! (see [`crate::workout::ticker`]).

use super::plan::SESSION_LENGTH_SECS;

/// What a single tick did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was taken off the clock.
    Counted,
    /// The clock hit zero and the session stopped.
    Finished,
    /// The session was not running.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTimer {
    is_active: bool,
    time_left: u32,
    exercise_index: usize,
    exercise_count: usize,
}

impl SessionTimer {
    pub fn new(exercise_count: usize) -> Self {
        Self {
            is_active: false,
            time_left: SESSION_LENGTH_SECS,
            exercise_index: 0,
            exercise_count,
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    pub fn exercise_count(&self) -> usize {
        self.exercise_count
    }

    /// Always restarts from the full length and the first exercise.
    pub fn start(&mut self) {
        self.is_active = true;
        self.time_left = SESSION_LENGTH_SECS;
        self.exercise_index = 0;
    }

    /// Stops the countdown, keeping the clock and the exercise index.
    pub fn pause(&mut self) {
        self.is_active = false;
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.needs_ticks() {
            return TickOutcome::Ignored;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.is_active = false;
            TickOutcome::Finished
        } else {
            self.time_left -= 1;
            TickOutcome::Counted
        }
    }

    /// Moves to the following exercise unless already on the last one.
    /// Returns whether the index changed.
    pub fn next_exercise(&mut self) -> bool {
        if self.exercise_index + 1 < self.exercise_count {
            self.exercise_index += 1;
            true
        } else {
            false
        }
    }

    /// Whether a recurring tick should be scheduled right now.
    pub fn needs_ticks(&self) -> bool {
        self.is_active && self.time_left > 0
    }

    /// Share of the countdown already spent, 0.0 to 1.0.
    pub fn elapsed_ratio(&self) -> f64 {
        let spent = SESSION_LENGTH_SECS.saturating_sub(self.time_left);
        f64::from(spent) / f64::from(SESSION_LENGTH_SECS)
    }
}

/// `m:ss`
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
