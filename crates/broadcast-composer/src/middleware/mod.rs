//! Middleware system for the widget stores
//!
//! Middleware sits between dispatch and reducer execution:
//!
//! ```text
//! Transition → Middleware Chain → Reducer → State → Subscribers
//! ```
//!
//! Each middleware can inspect the transition and the state it is about to
//! be applied to, and can block it from reaching the reducer. Effects never
//! pass through middleware; only the transitions they dispatch do.

use crate::actions::Transition;

mod logging;

pub use logging::LoggingMiddleware;

/// Middleware trait - sees transitions before they reach the reducer
///
/// Middleware runs while the store's state is locked, so it must not
/// dispatch back into the same store.
pub trait Middleware<S>: Send {
    /// Handle a transition
    ///
    /// - `transition`: The transition being dispatched
    /// - `state`: State the transition will be applied to (read-only)
    ///
    /// Returns `true` to continue the chain, `false` to consume the transition
    fn handle(&mut self, transition: &Transition, state: &S) -> bool;
}
