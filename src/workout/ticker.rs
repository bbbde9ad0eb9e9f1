//! # Session Ticker
//!
//! The recurring one-second callback that drives a [`SessionTimer`].
//!
//! A [`Ticker`] owns a Tokio task that sends a [`SessionTick`] down an
//! unbounded channel once per period. The UI event loop drains the channel
//! between input polls, so all state changes still happen on one thread.
//!
//! Every registration is stamped with a generation number. Ticks that were
//! already queued when a ticker got cancelled carry an old generation and are
//! dropped by the receiver, so at most one ticker ever affects the session.
//!
//! [`SessionTimer`]: crate::workout::SessionTimer

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// One elapsed period from the ticker registered as `generation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTick {
    pub generation: u64,
}

/// Handle to a scheduled recurring tick. Cancelled on drop.
#[derive(Debug)]
pub struct Ticker {
    generation: u64,
    task: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Schedule ticks every `period`, the first one a full period from now.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(generation: u64, period: Duration, tx: UnboundedSender<SessionTick>) -> Self {
        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(SessionTick { generation }).is_err() {
                    // Receiver gone, nobody left to tick for
                    break;
                }
            }
        });

        Self {
            generation,
            task: Some(task),
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_scheduled(&self) -> bool {
        self.task.is_some()
    }

    /// Stop the recurring tick. Calling it again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Hands out tickers with process-wide unique generations, all feeding the
/// same channel. Cheap to clone; every mounted home screen gets a copy.
#[derive(Debug, Clone)]
pub struct TickScheduler {
    tx: UnboundedSender<SessionTick>,
    next_generation: Arc<AtomicU64>,
    period: Duration,
}

impl TickScheduler {
    pub fn new(tx: UnboundedSender<SessionTick>) -> Self {
        Self::with_period(tx, TICK_PERIOD)
    }

    pub fn with_period(tx: UnboundedSender<SessionTick>, period: Duration) -> Self {
        Self {
            tx,
            next_generation: Arc::new(AtomicU64::new(1)),
            period,
        }
    }

    pub fn schedule(&self) -> Ticker {
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);
        Ticker::spawn(generation, self.period, self.tx.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn test_ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _ticker = Ticker::spawn(7, TICK_PERIOD, tx);

        let start = Instant::now();
        for _ in 0..3 {
            let tick = rx.recv().await.expect("tick");
            assert_eq!(tick.generation, 7);
        }
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_ticks_after_cancel() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut ticker = Ticker::spawn(1, TICK_PERIOD, tx);
        assert!(ticker.is_scheduled());

        ticker.cancel();
        assert!(!ticker.is_scheduled());
        ticker.cancel();

        time::sleep(Duration::from_secs(5)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scheduler_generations_are_unique() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let scheduler = TickScheduler::new(tx);
        let other = scheduler.clone();

        let a = scheduler.schedule();
        let b = other.schedule();
        let c = scheduler.schedule();
        assert_ne!(a.generation(), b.generation());
        assert_ne!(b.generation(), c.generation());
        assert_ne!(a.generation(), c.generation());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        drop(Ticker::spawn(1, TICK_PERIOD, tx));

        time::sleep(Duration::from_secs(5)).await;
        assert!(rx.recv().await.is_none());
    }
}
