//! Debounced callbacks
//!
//! A `Debouncer` owns one scheduled call at a time. Every `schedule` cancels
//! the pending call and starts a new quiet window, so a burst of calls runs
//! the callback once, after the window, with the arguments of the last call.
//! Each debounce site owns its own instance.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

pub struct Debouncer<A> {
    label: &'static str,
    wait: Duration,
    callback: Arc<dyn Fn(A) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new(
        label: &'static str,
        wait: Duration,
        callback: impl Fn(A) + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            wait,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Schedule the callback with `args`, superseding any pending call
    ///
    /// Must be called from within a tokio runtime; otherwise the call is
    /// logged and dropped.
    pub fn schedule(&self, args: A) {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                log::error!("{}: cannot schedule outside a tokio runtime: {}", self.label, e);
                return;
            }
        };

        let mut pending = self.lock_pending();
        if let Some(previous) = pending.take() {
            if !previous.is_finished() {
                log::trace!("{}: superseding pending call", self.label);
            }
            previous.abort();
        }

        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        let label = self.label;
        *pending = Some(runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            log::trace!("{}: quiet for {:?}, running", label, wait);
            callback(args);
        }));
    }

    /// Drop the pending call, if any
    pub fn cancel(&self) {
        if let Some(previous) = self.lock_pending().take() {
            previous.abort();
        }
    }

    /// Whether a scheduled call has not run yet
    pub fn is_pending(&self) -> bool {
        self.lock_pending()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    fn lock_pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        if let Some(pending) = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
        {
            pending.abort();
        }
    }
}
