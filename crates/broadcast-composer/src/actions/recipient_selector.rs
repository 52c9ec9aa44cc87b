//! Recipient selector action creators
//!
//! Selection changes are written to the active post mode's `selections`
//! right away; the recipient counts for the whole selection are refreshed
//! through a debouncer so a burst of changes (e.g. "select all") costs a
//! single fetch.

use super::{Action, Transition, on_fetch_failed, sort_by_name, sort_by_subchannel_hierarchy};
use crate::action_type::ActionType;
use crate::debounce::Debouncer;
use crate::state::{PostMode, RecipientSelectorState, SelectionType};
use crate::store::Dispatcher;
use composer_api::{EntityId, Group, PublishingApi, Subchannel, User};
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

type SelectorDispatcher = Dispatcher<RecipientSelectorState>;

/// Action creators of the recipient selector widget
///
/// Owns the recipient count debouncer; create one per store.
pub struct RecipientSelectorActions {
    recipient_counts: Arc<Debouncer<SelectorDispatcher>>,
}

impl RecipientSelectorActions {
    /// # Arguments
    ///
    /// * `api` - Client used to fetch recipient counts
    /// * `count_window` - Quiet window coalescing selection changes
    pub fn new(api: Arc<dyn PublishingApi>, count_window: Duration) -> Self {
        let recipient_counts = Debouncer::new(
            "recipient counts",
            count_window,
            move |dispatcher: SelectorDispatcher| {
                refresh_recipient_counts(Arc::clone(&api), &dispatcher);
            },
        );
        Self {
            recipient_counts: Arc::new(recipient_counts),
        }
    }

    /// Set the selection flag of `ids` under the active post mode, then
    /// schedule a recipient count refresh
    pub fn on_recipient_selection_item_change(
        &self,
        selection_type: SelectionType,
        is_selected: bool,
        ids: Vec<EntityId>,
    ) -> Action<RecipientSelectorState> {
        let recipient_counts = Arc::clone(&self.recipient_counts);
        Action::effect(move |dispatcher: &SelectorDispatcher| {
            change_selection(&recipient_counts, dispatcher, selection_type, is_selected, &ids);
        })
    }

    /// Toggle of a channel in the channel filter
    pub fn on_channel_filter_item_change(
        &self,
        channel_id: EntityId,
        is_selected: bool,
    ) -> Action<RecipientSelectorState> {
        self.on_recipient_selection_item_change(SelectionType::Channel, is_selected, vec![channel_id])
    }

    /// Toggle of all publishable subchannels of a channel at once
    ///
    /// The ids are resolved when the action runs, from the publishable
    /// subchannels of the active post mode.
    pub fn on_quickpick_subchannel_item_change(
        &self,
        channel_name: &str,
        is_selected: bool,
    ) -> Action<RecipientSelectorState> {
        let recipient_counts = Arc::clone(&self.recipient_counts);
        let channel_name = channel_name.to_string();
        Action::effect(move |dispatcher: &SelectorDispatcher| {
            let ids = dispatcher
                .state()
                .active_target()
                .subchannel_ids_of_channel(&channel_name);
            log::debug!("Quickpick {} resolved to subchannels {:?}", channel_name, ids);
            change_selection(
                &recipient_counts,
                dispatcher,
                SelectionType::Subchannel,
                is_selected,
                &ids,
            );
        })
    }

    /// Whether a recipient count refresh is waiting for its quiet window
    pub fn counts_pending(&self) -> bool {
        self.recipient_counts.is_pending()
    }
}

fn change_selection(
    recipient_counts: &Debouncer<SelectorDispatcher>,
    dispatcher: &SelectorDispatcher,
    selection_type: SelectionType,
    is_selected: bool,
    ids: &[EntityId],
) {
    let post_mode = dispatcher.state().post_mode;
    dispatcher.dispatch(selection_change(post_mode, selection_type, is_selected, ids));
    recipient_counts.schedule(dispatcher.clone());
}

fn selection_change(
    post_mode: PostMode,
    selection_type: SelectionType,
    is_selected: bool,
    ids: &[EntityId],
) -> Transition {
    let flags: Map<String, Value> = ids
        .iter()
        .map(|id| (id.to_string(), Value::Bool(is_selected)))
        .collect();
    Transition::at(
        ActionType::RecipientSelectionItemChange,
        &[&post_mode.to_string(), "selections", &selection_type.to_string()],
        flags,
    )
}

fn refresh_recipient_counts(api: Arc<dyn PublishingApi>, dispatcher: &SelectorDispatcher) {
    let selected = dispatcher.state().active_target().selected_ids();
    dispatcher.dispatch_async(async move {
        let transition = match api.recipient_counts(&selected).await {
            Ok(counts) => Transition::at(ActionType::FetchedBroadcastRecipientCounts, &[], counts),
            Err(e) => on_fetch_failed("recipient counts", &e),
        };
        transition.into()
    });
}

/// Open or close the recipients dropdown
pub fn on_recipients_dropdown_toggle() -> Action<RecipientSelectorState> {
    Action::effect(|dispatcher: &SelectorDispatcher| {
        let open = dispatcher.state().recipients_dropdown_toggle;
        dispatcher.dispatch(Transition::at(
            ActionType::RecipientsDropdownToggle,
            &["recipientsDropdownToggle"],
            !open,
        ));
    })
}

pub fn on_post_mode_change(post_mode: PostMode) -> Transition {
    Transition::at(ActionType::PostModeChange, &["postMode"], post_mode)
}

/// Publishable groups fetched, stored sorted by name
pub fn on_fetched_publishable_groups(groups: Vec<Group>) -> Transition {
    Transition::at(
        ActionType::FetchedPublishableGroups,
        &["socialBlast", "publishable", "group"],
        sort_by_name(groups),
    )
}

/// Publishable users fetched, stored sorted by name
pub fn on_fetched_publishable_users(users: Vec<User>) -> Transition {
    Transition::at(
        ActionType::FetchedPublishableUsers,
        &["socialBlast", "publishable", "user"],
        sort_by_name(users),
    )
}

/// Publishable subchannels fetched, stored in hierarchy order
pub fn on_fetched_publishable_subchannels(subchannels: Vec<Subchannel>) -> Transition {
    Transition::at(
        ActionType::FetchedPublishableSubchannels,
        &["socialPost", "publishable", "subchannel"],
        sort_by_subchannel_hierarchy(subchannels),
    )
}
