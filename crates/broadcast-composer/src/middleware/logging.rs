//! LoggingMiddleware - logs all transitions for debugging

use super::Middleware;
use crate::actions::Transition;

/// LoggingMiddleware - logs every transition dispatched to a store
///
/// Both widgets log through the same logger, so each line is prefixed with
/// the store name.
pub struct LoggingMiddleware {
    store_name: String,
}

impl LoggingMiddleware {
    pub fn new(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
        }
    }
}

impl<S> Middleware<S> for LoggingMiddleware {
    fn handle(&mut self, transition: &Transition, _state: &S) -> bool {
        match &transition.payload {
            Some(payload) => log::debug!(
                "[{}] Action: {} {}",
                self.store_name,
                transition.kind,
                payload
            ),
            None => log::debug!("[{}] Action: {}", self.store_name, transition.kind),
        }
        // Always continue to next middleware
        true
    }
}
