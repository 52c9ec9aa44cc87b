use super::UiEvent;
use crate::actions::recipient_selector::{
    on_fetched_publishable_groups, on_fetched_publishable_subchannels,
    on_fetched_publishable_users, on_post_mode_change, on_recipients_dropdown_toggle,
};
use crate::actions::{RecipientSelectorActions, on_fetch_failed, on_fetched_channels};
use crate::middleware::LoggingMiddleware;
use crate::reducers::recipient_selector_reducer;
use crate::state::RecipientSelectorState;
use crate::store::Store;
use composer_api::PublishingApi;
use composer_config::AppConfig;
use std::sync::Arc;

pub const STORE_NAME: &str = "recipientSelector";

/// Recipient selector widget: its store and the creators feeding it
pub struct RecipientSelectorApp {
    api: Arc<dyn PublishingApi>,
    store: Store<RecipientSelectorState>,
    actions: RecipientSelectorActions,
}

impl RecipientSelectorApp {
    pub fn new(api: Arc<dyn PublishingApi>, config: &AppConfig) -> Self {
        let store = Store::new(STORE_NAME, recipient_selector_reducer());
        store.add_middleware(LoggingMiddleware::new(STORE_NAME));
        let actions = RecipientSelectorActions::new(Arc::clone(&api), config.recipient_count_debounce());
        Self { api, store, actions }
    }

    pub fn store(&self) -> &Store<RecipientSelectorState> {
        &self.store
    }

    /// Fetch channels and publishable recipients
    ///
    /// The four fetches run concurrently. Nothing is dispatched unless all
    /// of them succeed; a failure is recorded as the last fetch error.
    pub async fn bootstrap(&self) {
        let fetched = tokio::try_join!(
            self.api.fetch_channels(),
            self.api.fetch_publishable_groups(),
            self.api.fetch_publishable_users(),
            self.api.fetch_publishable_subchannels(),
        );

        match fetched {
            Ok((channels, groups, users, subchannels)) => {
                log::info!(
                    "[{}] Bootstrapped {} channels, {} groups, {} users, {} subchannels",
                    STORE_NAME,
                    channels.len(),
                    groups.len(),
                    users.len(),
                    subchannels.len()
                );
                self.store.dispatch(on_fetched_channels(channels));
                self.store.dispatch(on_fetched_publishable_groups(groups));
                self.store.dispatch(on_fetched_publishable_users(users));
                self.store.dispatch(on_fetched_publishable_subchannels(subchannels));
            }
            Err(e) => self.store.dispatch(on_fetch_failed("bootstrap recipient selector", &e)),
        }
    }

    /// Route a UI event to its creator; returns false for events of other widgets
    pub fn handle_event(&self, event: &UiEvent) -> bool {
        match event {
            UiEvent::RecipientSelectionItemChange {
                selection_type,
                is_selected,
                ids,
            } => self.store.dispatch(self.actions.on_recipient_selection_item_change(
                *selection_type,
                *is_selected,
                ids.clone(),
            )),
            UiEvent::QuickpickSubchannelItemChange {
                channel_name,
                is_selected,
            } => self.store.dispatch(
                self.actions
                    .on_quickpick_subchannel_item_change(channel_name, *is_selected),
            ),
            UiEvent::ChannelFilterItemChange {
                channel_id,
                is_selected,
            } => self.store.dispatch(
                self.actions
                    .on_channel_filter_item_change(*channel_id, *is_selected),
            ),
            UiEvent::RecipientsDropdownToggle => self.store.dispatch(on_recipients_dropdown_toggle()),
            UiEvent::PostModeChange { post_mode } => self.store.dispatch(on_post_mode_change(*post_mode)),
            UiEvent::TextInput { .. } | UiEvent::DismissSharedLink => return false,
        }
        true
    }
}
