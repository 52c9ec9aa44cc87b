//! Broadcast composer state pipeline
//!
//! Two widgets, a recipient selector and a post composer, each keep their
//! state in an isolated Redux-style store:
//!
//! ```text
//! UiEvent → creator → Action ─┬─ Transition → Middleware → Reducer → State → Subscribers
//!                             └─ Effect(dispatcher) → dispatch / dispatch_async
//! ```
//!
//! Transitions carry partial state trees that reducers deep-merge into the
//! current state. Effects read state, dispatch further actions and schedule
//! debounced work (link detection, recipient counts).

pub mod action_type;
pub mod actions;
pub mod app;
pub mod debounce;
pub mod merge;
pub mod middleware;
pub mod reducers;
pub mod state;
pub mod store;

pub use action_type::ActionType;
pub use actions::{Action, Effect, Transition};
pub use app::{BroadcastComposerApp, RecipientSelectorApp, UiEvent};
pub use debounce::Debouncer;
pub use store::{Dispatcher, Store, SubscriptionId};
