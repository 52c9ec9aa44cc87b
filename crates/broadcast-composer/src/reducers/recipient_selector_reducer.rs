//! Recipient Selector Reducer

use super::{HandleActions, merge_action_payload};
use crate::action_type::ActionType;
use crate::actions::Transition;
use crate::state::RecipientSelectorState;
use composer_api::RecipientCounts;

/// Reducer of the recipient selector store
pub fn recipient_selector_reducer() -> HandleActions<RecipientSelectorState> {
    HandleActions::new(RecipientSelectorState::default())
        .on(ActionType::FetchedBroadcastRecipientCounts, set_placard_counts)
        .on(ActionType::FetchedChannels, merge_action_payload)
        .on(ActionType::FetchedPublishableGroups, merge_action_payload)
        .on(ActionType::FetchedPublishableSubchannels, merge_action_payload)
        .on(ActionType::FetchedPublishableUsers, merge_action_payload)
        .on(ActionType::FetchFailed, merge_action_payload)
        .on(ActionType::PostModeChange, merge_action_payload)
        .on(ActionType::RecipientsDropdownToggle, merge_action_payload)
        .on(ActionType::RecipientSelectionItemChange, merge_action_payload)
}

/// Replace the active post mode's placard counts with the fetched counts
///
/// Counts are written to whichever post mode is active when the result
/// arrives. A missing payload clears the counts.
pub fn set_placard_counts(
    mut state: RecipientSelectorState,
    transition: &Transition,
) -> RecipientSelectorState {
    let counts = match transition.payload.clone() {
        Some(payload) => match serde_json::from_value::<RecipientCounts>(payload) {
            Ok(counts) => counts,
            Err(e) => {
                log::error!("Dropping malformed recipient counts: {}", e);
                return state;
            }
        },
        None => RecipientCounts::new(),
    };

    let post_mode = state.post_mode;
    state.target_mut(post_mode).placard_counts = counts;
    state
}
