//! Reducers - pure functions producing the next state from state + transition
//!
//! A reducer is assembled from an ordered list of `(ActionType, handler)`
//! pairs and an initial state:
//! 1. no current state: the initial state (the transition is ignored)
//! 2. the first pair whose tag matches: its handler
//! 3. otherwise the state is returned unchanged

pub mod broadcast_composer_reducer;
pub mod recipient_selector_reducer;

pub use broadcast_composer_reducer::broadcast_composer_reducer;
pub use recipient_selector_reducer::recipient_selector_reducer;

use crate::action_type::ActionType;
use crate::actions::Transition;
use crate::merge::deep_merge;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Handler for one action type
pub type Handler<S> = fn(S, &Transition) -> S;

/// Reducer built from per-tag handlers
pub struct HandleActions<S> {
    handlers: Vec<(ActionType, Handler<S>)>,
    initial_state: S,
}

impl<S: Clone> HandleActions<S> {
    pub fn new(initial_state: S) -> Self {
        Self {
            handlers: Vec::new(),
            initial_state,
        }
    }

    /// Append a handler; for a tag registered twice the first one wins
    pub fn on(mut self, kind: ActionType, handler: Handler<S>) -> Self {
        if self.handles(kind) {
            log::warn!("Handler for {} registered twice, keeping the first", kind);
        }
        self.handlers.push((kind, handler));
        self
    }

    pub fn initial_state(&self) -> S {
        self.initial_state.clone()
    }

    pub fn handles(&self, kind: ActionType) -> bool {
        self.handlers.iter().any(|(handled, _)| *handled == kind)
    }

    pub fn reduce(&self, state: Option<S>, transition: &Transition) -> S {
        let Some(state) = state else {
            return self.initial_state();
        };

        match self
            .handlers
            .iter()
            .find(|(kind, _)| *kind == transition.kind)
        {
            Some((_, handler)) => handler(state, transition),
            None => state,
        }
    }
}

/// Deep-merge the transition's payload into the state
///
/// The state is merged as its JSON tree (see `merge::deep_merge`). A
/// payload that leaves a tree which no longer fits the state type is logged
/// and dropped.
pub fn merge_action_payload<S>(state: S, transition: &Transition) -> S
where
    S: Serialize + DeserializeOwned,
{
    let Some(payload) = &transition.payload else {
        return state;
    };

    let mut tree = match serde_json::to_value(&state) {
        Ok(tree) => tree,
        Err(e) => {
            log::error!("Failed to serialize state for {}: {}", transition.kind, e);
            return state;
        }
    };
    deep_merge(&mut tree, payload);

    match serde_json::from_value(tree) {
        Ok(next) => next,
        Err(e) => {
            log::error!("Dropping {} payload that does not fit the state: {}", transition.kind, e);
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        tags: Vec<String>,
        count: u32,
    }

    fn bump(mut state: Sample, _transition: &Transition) -> Sample {
        state.count += 1;
        state
    }

    fn reducer() -> HandleActions<Sample> {
        HandleActions::new(Sample {
            name: "initial".to_string(),
            ..Default::default()
        })
        .on(ActionType::TitleInput, merge_action_payload)
        .on(ActionType::PictureInput, bump)
    }

    #[test]
    fn test_missing_state_yields_initial_state() {
        let state = reducer().reduce(None, &Transition::bare(ActionType::PictureInput));
        assert_eq!(state.name, "initial");
        assert_eq!(state.count, 0);
    }

    #[test]
    fn test_matching_handler_applies() {
        let state = reducer().reduce(
            Some(Sample::default()),
            &Transition::bare(ActionType::PictureInput),
        );
        assert_eq!(state.count, 1);
    }

    #[test]
    fn test_unknown_tags_are_noops() {
        let reducer = reducer();
        let start = Sample {
            name: "kept".to_string(),
            tags: vec!["a".to_string()],
            count: 3,
        };
        let mut state = start.clone();
        for kind in [ActionType::FetchedChannels, ActionType::DismissSharedLink, ActionType::FetchFailed] {
            state = reducer.reduce(Some(state), &Transition::new(kind, json!({"name": "changed"})));
        }
        assert_eq!(state, start);
    }

    #[test]
    fn test_first_registered_handler_wins() {
        let reducer = HandleActions::new(Sample::default())
            .on(ActionType::PictureInput, bump)
            .on(ActionType::PictureInput, |state: Sample, _: &Transition| Sample {
                count: 100,
                ..state
            });
        let state = reducer.reduce(Some(Sample::default()), &Transition::bare(ActionType::PictureInput));
        assert_eq!(state.count, 1);
    }

    #[test]
    fn test_merge_replaces_lists_and_keeps_other_fields() {
        let state = Sample {
            name: "n".to_string(),
            tags: vec!["a".to_string(), "b".to_string()],
            count: 2,
        };
        let next = merge_action_payload(
            state,
            &Transition::new(ActionType::TitleInput, json!({"tags": ["c"]})),
        );
        assert_eq!(next.tags, vec!["c".to_string()]);
        assert_eq!(next.name, "n");
        assert_eq!(next.count, 2);
    }

    #[test]
    fn test_merge_twice_equals_merge_once() {
        let transition = Transition::new(ActionType::TitleInput, json!({"name": "x", "tags": ["t"]}));
        let once = merge_action_payload(Sample::default(), &transition);
        let twice = merge_action_payload(once.clone(), &transition);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_drops_payload_of_wrong_shape() {
        let state = Sample {
            count: 7,
            ..Default::default()
        };
        let next = merge_action_payload(
            state.clone(),
            &Transition::new(ActionType::TitleInput, json!({"count": "seven"})),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_merge_without_payload_is_noop() {
        let state = Sample {
            count: 7,
            ..Default::default()
        };
        let next = merge_action_payload(state.clone(), &Transition::bare(ActionType::TitleInput));
        assert_eq!(next, state);
    }
}
