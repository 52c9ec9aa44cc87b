use crate::actions::{Action, Transition};
use crate::middleware::Middleware;
use crate::reducers::HandleActions;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Callback notified with a state snapshot after every applied transition
pub type Subscriber<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// Handle returned by `Store::subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Redux-style Store that holds one widget's state and dispatches actions
///
/// The Store follows the Redux pattern:
/// - Centralized state management
/// - Transitions pass through the middleware chain, then the reducer
/// - Effects run immediately with a `Dispatcher` onto this store
/// - State is replaced on each transition, then subscribers are notified
///
/// Each dispatch computes the whole next state under the state lock, so no
/// reducer or subscriber ever sees a partially applied transition. The
/// store is a cheap handle; clones share the same state.
///
/// Applied states are numbered and handed to subscribers in that order by
/// one delivering thread at a time. A state applied while a delivery is
/// running (on another thread, or from a subscriber) is left to that
/// delivery. Subscribers may then skip intermediate states, but the last
/// state they see is always the store's current state.
///
/// # Example
///
/// ```rust,ignore
/// let store = Store::new("recipientSelector", recipient_selector_reducer());
/// store.add_middleware(LoggingMiddleware::new("recipientSelector"));
/// store.subscribe(|state| render(state));
///
/// store.dispatch(on_post_mode_change(PostMode::SocialBlast));
/// ```
pub struct Store<S> {
    inner: Arc<StoreInner<S>>,
}

struct StoreInner<S> {
    name: String,
    reducer: HandleActions<S>,
    state: Mutex<S>,
    middleware: Mutex<Vec<Box<dyn Middleware<S>>>>,
    /// Number of the last applied state, advanced under the state lock
    version: AtomicU64,
    notifications: Mutex<Notifications<S>>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber<S>)>>,
    next_subscription: AtomicU64,
}

struct Notifications<S> {
    /// Newest applied state not handed to subscribers yet
    pending: Option<(u64, S)>,
    /// Version of the last state handed to subscribers
    delivered: u64,
    delivering: bool,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<S: Clone + Send + Sync + 'static> Store<S> {
    /// Create a new store starting from the reducer's initial state
    pub fn new(name: impl Into<String>, reducer: HandleActions<S>) -> Self {
        let state = reducer.initial_state();
        Self {
            inner: Arc::new(StoreInner {
                name: name.into(),
                reducer,
                state: Mutex::new(state),
                middleware: Mutex::new(Vec::new()),
                version: AtomicU64::new(0),
                notifications: Mutex::new(Notifications {
                    pending: None,
                    delivered: 0,
                    delivering: false,
                }),
                subscribers: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    /// Name used in log output
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware<S> + 'static>(&self, middleware: M) {
        lock(&self.inner.middleware).push(Box::new(middleware));
    }

    /// Snapshot of the current state
    pub fn state(&self) -> S {
        lock(&self.inner.state).clone()
    }

    /// Register a callback notified after every applied transition
    pub fn subscribe(&self, subscriber: impl Fn(&S) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        lock(&self.inner.subscribers).push((id, Arc::new(subscriber)));
        id
    }

    /// Remove a subscriber; returns false if it was not registered
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = lock(&self.inner.subscribers);
        let before = subscribers.len();
        subscribers.retain(|(subscription, _)| *subscription != id);
        subscribers.len() != before
    }

    /// Dispatcher handed to effects
    pub fn dispatcher(&self) -> Dispatcher<S> {
        Dispatcher {
            store: self.clone(),
        }
    }

    /// Dispatch an action
    ///
    /// Transitions run through the middleware chain and the reducer, then
    /// subscribers are notified before this returns, unless a delivery is
    /// already running, which then hands them the new state. Effects run
    /// right away.
    pub fn dispatch(&self, action: impl Into<Action<S>>) {
        match action.into() {
            Action::Transition(transition) => self.apply(transition),
            Action::Effect(effect) => effect.run(&self.dispatcher()),
        }
    }

    fn apply(&self, transition: Transition) {
        let (version, snapshot) = {
            let mut state = lock(&self.inner.state);

            let mut middleware = lock(&self.inner.middleware);
            for mw in middleware.iter_mut() {
                if !mw.handle(&transition, &state) {
                    log::debug!("[{}] {} consumed by middleware", self.name(), transition.kind);
                    return;
                }
            }
            drop(middleware);

            let next = self.inner.reducer.reduce(Some(state.clone()), &transition);
            *state = next;
            let version = self.inner.version.fetch_add(1, Ordering::SeqCst) + 1;
            (version, state.clone())
        };

        self.notify(version, snapshot);
    }

    fn notify(&self, version: u64, snapshot: S) {
        {
            let mut notifications = lock(&self.inner.notifications);
            let newest = notifications
                .pending
                .as_ref()
                .map_or(notifications.delivered, |(pending, _)| *pending);
            if version > newest {
                notifications.pending = Some((version, snapshot));
            } else {
                log::trace!("[{}] Skipping superseded state {}", self.name(), version);
            }
            if notifications.delivering {
                return;
            }
            notifications.delivering = true;
        }

        // Subscribers may dispatch again, so no lock is held while notifying
        loop {
            let state = {
                let mut notifications = lock(&self.inner.notifications);
                match notifications.pending.take() {
                    Some((version, state)) => {
                        notifications.delivered = version;
                        state
                    }
                    None => {
                        notifications.delivering = false;
                        return;
                    }
                }
            };

            let subscribers: Vec<Subscriber<S>> = lock(&self.inner.subscribers)
                .iter()
                .map(|(_, subscriber)| Arc::clone(subscriber))
                .collect();
            for subscriber in subscribers {
                subscriber(&state);
            }
        }
    }
}

/// Dispatch and state-read access handed to effects
///
/// Unlike the store itself, a dispatcher can't add middleware or
/// subscribers.
pub struct Dispatcher<S> {
    store: Store<S>,
}

impl<S> Clone for Dispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: Clone + Send + Sync + 'static> Dispatcher<S> {
    /// Dispatch an action onto the store
    pub fn dispatch(&self, action: impl Into<Action<S>>) {
        self.store.dispatch(action);
    }

    /// Snapshot of the store's current state
    pub fn state(&self) -> S {
        self.store.state()
    }

    /// Dispatch the action produced by a future once it resolves
    ///
    /// The future runs as a tokio task. Nothing cancels it: if several are
    /// in flight they all dispatch, in completion order.
    pub fn dispatch_async<F>(&self, future: F)
    where
        F: Future<Output = Action<S>> + Send + 'static,
    {
        let dispatcher = self.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(runtime) => {
                runtime.spawn(async move {
                    dispatcher.dispatch(future.await);
                });
            }
            Err(e) => {
                log::error!("[{}] Cannot dispatch async action: {}", self.store.name(), e);
            }
        }
    }
}
