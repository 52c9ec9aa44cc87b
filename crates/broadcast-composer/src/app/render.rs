use crate::debounce::Debouncer;
use crate::store::{Store, SubscriptionId};
use std::time::Duration;

/// Subscribe `render` to a store through a debouncer
///
/// A burst of transitions inside `window` renders once, with the latest
/// state. With a zero window, transitions dispatched in the same tick
/// coalesce.
pub fn subscribe_debounced<S>(
    store: &Store<S>,
    window: Duration,
    render: impl Fn(S) + Send + Sync + 'static,
) -> SubscriptionId
where
    S: Clone + Send + Sync + 'static,
{
    let debouncer = Debouncer::new("render", window, render);
    store.subscribe(move |state: &S| debouncer.schedule(state.clone()))
}
