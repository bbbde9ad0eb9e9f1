//! Home screen state: the daily plan, its session timer and the ticker that
//! drives it.
//!
//! The home screen is the only owner of a [`Ticker`]. The ticker is replaced
//! on every start, cancelled on pause and on the finishing tick, and dropped
//! together with the screen when the router navigates away.

use crate::workout::plan::{self, WorkoutPlan};
use crate::workout::{Exercise, SessionTick, SessionTimer, TickOutcome, TickScheduler, Ticker};

#[derive(Debug)]
pub struct HomeScreen {
    plan: &'static WorkoutPlan,
    session: SessionTimer,
    scheduler: TickScheduler,
    ticker: Option<Ticker>,
    quote: &'static str,
}

impl HomeScreen {
    pub fn new(scheduler: TickScheduler) -> Self {
        let plan = WorkoutPlan::daily();
        Self {
            plan,
            session: SessionTimer::new(plan.exercise_count()),
            scheduler,
            ticker: None,
            quote: plan::todays_quote(),
        }
    }

    pub fn plan(&self) -> &'static WorkoutPlan {
        self.plan
    }

    pub fn session(&self) -> &SessionTimer {
        &self.session
    }

    pub fn quote(&self) -> &'static str {
        self.quote
    }

    pub fn current_exercise(&self) -> Option<&'static Exercise> {
        self.plan.exercises.get(self.session.exercise_index())
    }

    /// Generation of the live ticker, if one is scheduled.
    pub fn ticker_generation(&self) -> Option<u64> {
        self.ticker
            .as_ref()
            .filter(|t| t.is_scheduled())
            .map(Ticker::generation)
    }

    /// Start (or restart) the session. Any previous ticker is cancelled
    /// before the new one is scheduled.
    pub fn start_session(&mut self) {
        self.session.start();
        self.stop_ticker();
        if self.session.needs_ticks() {
            self.ticker = Some(self.scheduler.schedule());
        }
    }

    pub fn pause_session(&mut self) {
        self.session.pause();
        self.stop_ticker();
    }

    pub fn next_exercise(&mut self) -> bool {
        self.session.next_exercise()
    }

    /// Apply a tick. Ticks from any ticker other than the live one are
    /// ignored.
    pub fn on_tick(&mut self, tick: SessionTick) -> TickOutcome {
        if self.ticker_generation() != Some(tick.generation) {
            return TickOutcome::Ignored;
        }
        let outcome = self.session.tick();
        if !self.session.needs_ticks() {
            self.stop_ticker();
        }
        outcome
    }

    fn stop_ticker(&mut self) {
        if let Some(mut ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }
}
