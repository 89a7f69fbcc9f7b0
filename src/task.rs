//! Frame-loop polling for tokio tasks
//!
//! The UI never awaits. Background work is spawned on the runtime and the
//! handle is checked once per frame until it finishes.

use futures::FutureExt;
use tokio::task::JoinHandle;

/// Result of polling a task
pub enum PollResult<T> {
    /// No task in flight
    NoTask,
    /// Task is still running
    Pending,
    /// Task finished; a join error means it panicked
    Complete(Result<T, tokio::task::JoinError>),
}

/// Poll an optional task handle, taking it out of the slot once finished.
///
/// ```ignore
/// match poll_task(&mut self.task) {
///     PollResult::Complete(Ok(Ok(result))) => { /* success */ }
///     PollResult::Complete(Ok(Err(e))) => { /* task returned error */ }
///     PollResult::Complete(Err(e)) => { /* task panicked */ }
///     PollResult::Pending => ctx.request_repaint(),
///     PollResult::NoTask => {}
/// }
/// ```
pub fn poll_task<T>(task: &mut Option<JoinHandle<T>>) -> PollResult<T> {
    let Some(handle) = task.as_mut() else {
        return PollResult::NoTask;
    };

    if !handle.is_finished() {
        return PollResult::Pending;
    }

    // The handle only leaves the slot once its output is in hand
    match (&mut *handle).now_or_never() {
        Some(result) => {
            *task = None;
            PollResult::Complete(result)
        }
        None => {
            tracing::warn!("Task not ready despite is_finished()");
            PollResult::Pending
        }
    }
}
