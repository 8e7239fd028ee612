//! Cancellable delayed trigger.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::trace;

/// Quiet period after the last keystroke before search text applies.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

type Sink<T> = Arc<dyn Fn(T) + Send + Sync>;

/// Delivers the most recent pushed value to a sink once `window` has
/// passed without another push.
///
/// Each push cancels the pending delivery and starts a new timer. The
/// timer is owned by the debouncer and aborted when it is dropped, so a
/// torn-down view never receives a late value. Must be used inside a
/// Tokio runtime.
pub struct Debouncer<T> {
    window: Duration,
    sink: Sink<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(window: Duration, sink: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            window,
            sink: Arc::new(sink),
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `value`, replacing anything still waiting.
    pub fn push(&mut self, value: T) {
        self.cancel();

        let sink = Arc::clone(&self.sink);
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            sink(value);
        }));
    }

    /// Drop the pending value, if any. Returns whether one was waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) if !handle.is_finished() => {
                handle.abort();
                trace!("Cancelled pending debounce");
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
