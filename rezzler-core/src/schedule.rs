use std::time::Duration;

/// One-shot delayed work on the UI thread.
pub trait Scheduler {
    fn schedule_once(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Box<dyn ScheduledTask>;
}

/// Handle to work queued with a [`Scheduler`].
pub trait ScheduledTask {
    /// Stop the task from running. Returns `true` if it had not run yet.
    fn cancel(&mut self) -> bool;
}
