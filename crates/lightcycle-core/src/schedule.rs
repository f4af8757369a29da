use std::time::Duration;

/// Fixed-period tick source driven by the [`GameController`](crate::controller::GameController).
///
/// The controller only starts and stops the schedule; delivering ticks is up
/// to the runtime that owns it (a tokio interval in the terminal frontend, a
/// test calling `on_tick` directly in unit tests). A stopped scheduler must not
/// deliver ticks until it is started again.
pub trait TickScheduler {
    /// Begin ticking every `period`, replacing any previous schedule.
    fn start(&mut self, period: Duration);

    /// Stop ticking. Stopping an idle scheduler is a no-op.
    fn stop(&mut self);

    /// Whether ticks are currently being delivered.
    fn is_running(&self) -> bool;

    /// Period of the active schedule, if running.
    fn period(&self) -> Option<Duration>;
}
