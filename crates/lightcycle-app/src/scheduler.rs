use std::time::Duration;

use tokio::time::{Instant, Interval, MissedTickBehavior};

use lightcycle_core::schedule::TickScheduler;

/// Tick scheduler backed by a tokio interval.
///
/// The first tick fires one period after `start`, and late ticks are skipped
/// rather than bunched up. While stopped, [`IntervalScheduler::tick`] never
/// resolves, so a `select!` loop simply waits on its other branches.
#[derive(Debug, Default)]
pub struct IntervalScheduler {
    interval: Option<Interval>,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the next tick.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            },
            None => std::future::pending::<()>().await,
        }
    }
}

impl TickScheduler for IntervalScheduler {
    fn start(&mut self, period: Duration) {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
        tracing::debug!(?period, "Tick schedule started");
    }

    fn stop(&mut self) {
        if self.interval.take().is_some() {
            tracing::debug!("Tick schedule stopped");
        }
    }

    fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    fn period(&self) -> Option<Duration> {
        self.interval.as_ref().map(Interval::period)
    }
}
