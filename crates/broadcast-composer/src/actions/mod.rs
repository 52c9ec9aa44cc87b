//! Actions module
//!
//! An action is either a `Transition` (a tagged partial state tree, folded
//! into the state by the store's reducer) or an `Effect` (a deferred
//! procedure that gets dispatch and state-read access and may dispatch any
//! number of further actions, now or after async work).
//!
//! Action creators are organized per widget:
//! - `recipient_selector`: selection, post mode and recipient counts
//! - `broadcast_composer`: text inputs, link detection and dismissal
//!
//! Creators shared by both widgets live here.

pub mod broadcast_composer;
pub mod recipient_selector;

pub use broadcast_composer::BroadcastComposerActions;
pub use recipient_selector::RecipientSelectorActions;

use crate::action_type::ActionType;
use crate::merge::at_path;
use crate::store::Dispatcher;
use composer_api::{Channel, NamedEntity, Subchannel};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// A tagged state transition
///
/// The payload is a partial state tree; the reducer decides whether it is
/// merged, interpreted or ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub kind: ActionType,
    pub payload: Option<Value>,
}

impl Transition {
    pub fn new(kind: ActionType, payload: Value) -> Self {
        Self {
            kind,
            payload: Some(payload),
        }
    }

    /// Transition without payload
    pub fn bare(kind: ActionType) -> Self {
        Self {
            kind,
            payload: None,
        }
    }

    /// Transition whose payload holds `value` nested under `path`
    ///
    /// A value that fails to serialize is logged and the transition is sent
    /// without payload.
    pub fn at(kind: ActionType, path: &[&str], value: impl Serialize) -> Self {
        match serde_json::to_value(value) {
            Ok(leaf) => Self::new(kind, at_path(path, leaf)),
            Err(e) => {
                log::error!("Failed to serialize {} payload: {}", kind, e);
                Self::bare(kind)
            }
        }
    }
}

/// Deferred procedure run with access to a store
pub struct Effect<S>(Box<dyn FnOnce(&Dispatcher<S>) + Send>);

impl<S> Effect<S> {
    pub fn new(procedure: impl FnOnce(&Dispatcher<S>) + Send + 'static) -> Self {
        Self(Box::new(procedure))
    }

    pub fn run(self, dispatcher: &Dispatcher<S>) {
        (self.0)(dispatcher)
    }
}

/// Result of an action creator
pub enum Action<S> {
    /// Folded into the state immediately
    Transition(Transition),
    /// Run immediately with dispatch and state-read access
    Effect(Effect<S>),
}

impl<S> Action<S> {
    pub fn effect(procedure: impl FnOnce(&Dispatcher<S>) + Send + 'static) -> Self {
        Action::Effect(Effect::new(procedure))
    }

    pub fn as_transition(&self) -> Option<&Transition> {
        match self {
            Action::Transition(transition) => Some(transition),
            Action::Effect(_) => None,
        }
    }
}

impl<S> From<Transition> for Action<S> {
    fn from(transition: Transition) -> Self {
        Action::Transition(transition)
    }
}

impl<S> fmt::Debug for Action<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transition(transition) => f.debug_tuple("Transition").field(transition).finish(),
            Self::Effect(_) => write!(f, "Effect"),
        }
    }
}

/// Sort records by name (stable)
pub fn sort_by_name(mut records: Vec<NamedEntity>) -> Vec<NamedEntity> {
    records.sort_by(|a, b| a.name.cmp(&b.name));
    records
}

/// Sort subchannels by channel name, primary subchannel, type, then name (stable)
///
/// Subchannels without a primary subchannel or without a type sort after
/// those that have one.
pub fn sort_by_subchannel_hierarchy(mut subchannels: Vec<Subchannel>) -> Vec<Subchannel> {
    subchannels.sort_by(|a, b| hierarchy_key(a).cmp(&hierarchy_key(b)));
    subchannels
}

fn hierarchy_key(subchannel: &Subchannel) -> (&str, bool, Option<u64>, bool, &str, &str) {
    (
        subchannel.channel_name.as_str(),
        subchannel.primary_subchannel_id.is_none(),
        subchannel.primary_subchannel_id,
        subchannel.kind.is_empty(),
        subchannel.kind.as_str(),
        subchannel.name.as_str(),
    )
}

/// Channels fetched, stored sorted by name
pub fn on_fetched_channels(channels: Vec<Channel>) -> Transition {
    Transition::at(ActionType::FetchedChannels, &["channels"], sort_by_name(channels))
}

/// A fetch failed; recorded in `lastFetchError`
pub fn on_fetch_failed(context: &str, error: &anyhow::Error) -> Transition {
    log::warn!("Fetch failed ({}): {:#}", context, error);
    Transition::at(
        ActionType::FetchFailed,
        &["lastFetchError"],
        format!("{}: {:#}", context, error),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn subchannel(id: u64, channel: &str, primary: Option<u64>, kind: &str, name: &str) -> Subchannel {
        Subchannel {
            id,
            name: name.to_string(),
            channel_name: channel.to_string(),
            primary_subchannel_id: primary,
            kind: kind.to_string(),
            extra: Default::default(),
        }
    }

    #[test]
    fn test_fetched_channels_sorted_by_name() {
        let transition = on_fetched_channels(vec![NamedEntity::new(2, "b"), NamedEntity::new(1, "a")]);
        assert_eq!(transition.kind, ActionType::FetchedChannels);
        assert_eq!(
            transition.payload,
            Some(json!({"channels": [{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]}))
        );
    }

    #[test]
    fn test_sort_by_name_is_stable() {
        let sorted = sort_by_name(vec![
            NamedEntity::new(3, "same"),
            NamedEntity::new(1, "alpha"),
            NamedEntity::new(2, "same"),
        ]);
        let ids: Vec<u64> = sorted.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 3, 2]);
    }

    #[test]
    fn test_subchannel_hierarchy_order() {
        let sorted = sort_by_subchannel_hierarchy(vec![
            subchannel(1, "twitter", Some(1), "profile", "@acme"),
            subchannel(2, "facebook", Some(5), "page", "Zeta"),
            subchannel(3, "facebook", Some(5), "group", "Beta"),
            subchannel(4, "facebook", Some(4), "page", "Alpha"),
            subchannel(5, "facebook", Some(5), "page", "Acme"),
        ]);
        let ids: Vec<u64> = sorted.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![4, 3, 5, 2, 1]);
    }

    #[test]
    fn test_subchannels_missing_primary_or_type_sort_last() {
        let sorted = sort_by_subchannel_hierarchy(vec![
            subchannel(1, "facebook", None, "page", "A"),
            subchannel(2, "facebook", Some(5), "", "B"),
            subchannel(3, "facebook", Some(5), "page", "C"),
            subchannel(4, "facebook", Some(9), "group", "D"),
            subchannel(5, "twitter", None, "profile", "E"),
        ]);
        let ids: Vec<u64> = sorted.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![3, 2, 4, 1, 5]);
    }

    #[test]
    fn test_fetch_failed_payload() {
        let error = anyhow::anyhow!("connection refused");
        let transition = on_fetch_failed("fetch channels", &error);
        assert_eq!(
            transition.payload,
            Some(json!({"lastFetchError": "fetch channels: connection refused"}))
        );
    }

    #[test]
    fn test_action_debug_hides_effect_body() {
        let action: Action<()> = Action::effect(|_| {});
        assert_eq!(format!("{:?}", action), "Effect");
        assert!(action.as_transition().is_none());
    }
}
