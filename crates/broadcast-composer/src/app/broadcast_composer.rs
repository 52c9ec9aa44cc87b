use super::{TextField, UiEvent};
use crate::actions::broadcast_composer::{
    on_description_input, on_dismiss_shared_link, on_picture_input, on_title_input,
};
use crate::actions::{BroadcastComposerActions, on_fetch_failed, on_fetched_channels};
use crate::debounce::Debouncer;
use crate::middleware::LoggingMiddleware;
use crate::reducers::broadcast_composer_reducer;
use crate::state::BroadcastComposerState;
use crate::store::Store;
use composer_api::{PublishingApi, extract_uris};
use composer_config::AppConfig;
use std::collections::HashMap;
use std::sync::Arc;
use strum::IntoEnumIterator;

pub const STORE_NAME: &str = "broadcastComposer";

/// Latest value of a text input
#[derive(Debug, Clone)]
struct TextInput {
    selector: String,
    cursor_position: usize,
    value: String,
}

/// Broadcast composer widget: its store, the creators feeding it and one
/// input debouncer per text field
pub struct BroadcastComposerApp {
    api: Arc<dyn PublishingApi>,
    store: Store<BroadcastComposerState>,
    inputs: HashMap<TextField, Debouncer<TextInput>>,
}

impl BroadcastComposerApp {
    pub fn new(api: Arc<dyn PublishingApi>, config: &AppConfig) -> Self {
        let store = Store::new(STORE_NAME, broadcast_composer_reducer());
        store.add_middleware(LoggingMiddleware::new(STORE_NAME));

        let actions = Arc::new(BroadcastComposerActions::new(
            Arc::clone(&api),
            Arc::new(extract_uris),
            config.link_detection_debounce(),
        ));

        let inputs = TextField::iter()
            .map(|field| {
                let store = store.clone();
                let actions = Arc::clone(&actions);
                let debouncer = Debouncer::new(field.into(), config.input_debounce(), move |input: TextInput| {
                    store.dispatch(match field {
                        TextField::Message => actions.on_message_input_with_link_detection(
                            &input.selector,
                            input.cursor_position,
                            &input.value,
                        ),
                        TextField::Title => on_title_input(&input.selector, input.cursor_position, &input.value),
                        TextField::Picture => on_picture_input(&input.selector, input.cursor_position, &input.value),
                        TextField::Description => {
                            on_description_input(&input.selector, input.cursor_position, &input.value)
                        }
                    });
                });
                (field, debouncer)
            })
            .collect();

        Self { api, store, inputs }
    }

    pub fn store(&self) -> &Store<BroadcastComposerState> {
        &self.store
    }

    /// Fetch the channels previews are rendered for
    pub async fn bootstrap(&self) {
        match self.api.fetch_channels().await {
            Ok(channels) => {
                log::info!("[{}] Bootstrapped {} channels", STORE_NAME, channels.len());
                self.store.dispatch(on_fetched_channels(channels));
            }
            Err(e) => self.store.dispatch(on_fetch_failed("bootstrap broadcast composer", &e)),
        }
    }

    /// Route a UI event to its creator; returns false for events of other widgets
    ///
    /// Text inputs reach the store once the field has been quiet for the
    /// input debounce window.
    pub fn handle_event(&self, event: &UiEvent) -> bool {
        match event {
            UiEvent::TextInput {
                field,
                selector,
                cursor_position,
                value,
            } => match self.inputs.get(field) {
                Some(debouncer) => debouncer.schedule(TextInput {
                    selector: selector.clone(),
                    cursor_position: *cursor_position,
                    value: value.clone(),
                }),
                None => log::error!("[{}] No input debouncer for {:?}", STORE_NAME, field),
            },
            UiEvent::DismissSharedLink => self.store.dispatch(on_dismiss_shared_link()),
            UiEvent::RecipientSelectionItemChange { .. }
            | UiEvent::QuickpickSubchannelItemChange { .. }
            | UiEvent::ChannelFilterItemChange { .. }
            | UiEvent::RecipientsDropdownToggle
            | UiEvent::PostModeChange { .. } => return false,
        }
        true
    }
}
