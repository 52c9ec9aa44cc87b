//! Broadcast composer action creators

use super::{Action, Transition, on_fetch_failed};
use crate::action_type::ActionType;
use crate::debounce::Debouncer;
use crate::state::BroadcastComposerState;
use crate::store::Dispatcher;
use composer_api::{ProcuredAssets, PublishingApi};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

type ComposerDispatcher = Dispatcher<BroadcastComposerState>;

/// Extracts candidate links from message text, in order of appearance
pub type ExtractUris = Arc<dyn Fn(&str) -> Vec<String> + Send + Sync>;

/// Action creators of the broadcast composer widget
///
/// Owns the link detection debouncer; create one per store.
pub struct BroadcastComposerActions {
    link_detection: Arc<Debouncer<(String, ComposerDispatcher)>>,
}

impl BroadcastComposerActions {
    /// # Arguments
    ///
    /// * `api` - Client used to procure post assets for a detected link
    /// * `extract_uris` - Link extraction applied to the message text
    /// * `detection_window` - Quiet window before a message is scanned
    pub fn new(
        api: Arc<dyn PublishingApi>,
        extract_uris: ExtractUris,
        detection_window: Duration,
    ) -> Self {
        let link_detection = Debouncer::new(
            "link detection",
            detection_window,
            move |(message, dispatcher): (String, ComposerDispatcher)| {
                detect_shared_link(Arc::clone(&api), &extract_uris, &message, &dispatcher);
            },
        );
        Self {
            link_detection: Arc::new(link_detection),
        }
    }

    /// Update the message right away and scan it for a link once typing
    /// settles
    pub fn on_message_input_with_link_detection(
        &self,
        selector: &str,
        cursor_position: usize,
        message: &str,
    ) -> Action<BroadcastComposerState> {
        let link_detection = Arc::clone(&self.link_detection);
        let update = on_message_input(selector, cursor_position, message);
        let message = message.to_string();
        Action::effect(move |dispatcher: &ComposerDispatcher| {
            dispatcher.dispatch(update);
            link_detection.schedule((message, dispatcher.clone()));
        })
    }

    /// Whether a link detection is waiting for its quiet window
    pub fn detection_pending(&self) -> bool {
        self.link_detection.is_pending()
    }
}

fn detect_shared_link(
    api: Arc<dyn PublishingApi>,
    extract_uris: &ExtractUris,
    message: &str,
    dispatcher: &ComposerDispatcher,
) {
    let state = dispatcher.state();
    if let Some(link) = state.post_assets.active_shared_link() {
        log::debug!("Shared link {} already attached, skipping detection", link);
        return;
    }

    let Some(link) = extract_uris(message)
        .into_iter()
        .find(|uri| !state.is_dismissed(uri))
    else {
        return;
    };

    log::info!("Detected shared link {}", link);
    dispatcher.dispatch(Transition::at(
        ActionType::DetectSharedLink,
        &["postAssets", "sharedLink"],
        &link,
    ));
    dispatcher.dispatch_async(async move {
        let transition = match api.procure_post_assets(&link).await {
            Ok(assets) => on_fetched_procure_post_assets(assets),
            Err(e) => on_fetch_failed(&format!("procure post assets for {}", link), &e),
        };
        transition.into()
    });
}

/// Remember which input to focus, then apply the wrapped update
pub fn on_refocus_input(
    selector: &str,
    cursor_position: usize,
    update: Transition,
) -> Action<BroadcastComposerState> {
    let refocus = Transition::at(
        ActionType::RefocusInput,
        &["refocusInput"],
        json!({"selector": selector, "cursorPosition": cursor_position}),
    );
    Action::effect(move |dispatcher: &ComposerDispatcher| {
        dispatcher.dispatch(refocus);
        dispatcher.dispatch(update);
    })
}

pub fn on_message_input(
    selector: &str,
    cursor_position: usize,
    message: &str,
) -> Action<BroadcastComposerState> {
    post_asset_input(ActionType::MessageInput, "message", selector, cursor_position, message)
}

pub fn on_title_input(
    selector: &str,
    cursor_position: usize,
    title: &str,
) -> Action<BroadcastComposerState> {
    post_asset_input(ActionType::TitleInput, "title", selector, cursor_position, title)
}

pub fn on_picture_input(
    selector: &str,
    cursor_position: usize,
    picture: &str,
) -> Action<BroadcastComposerState> {
    post_asset_input(ActionType::PictureInput, "picture", selector, cursor_position, picture)
}

pub fn on_description_input(
    selector: &str,
    cursor_position: usize,
    description: &str,
) -> Action<BroadcastComposerState> {
    post_asset_input(
        ActionType::DescriptionInput,
        "description",
        selector,
        cursor_position,
        description,
    )
}

fn post_asset_input(
    kind: ActionType,
    field: &str,
    selector: &str,
    cursor_position: usize,
    value: &str,
) -> Action<BroadcastComposerState> {
    on_refocus_input(
        selector,
        cursor_position,
        Transition::at(kind, &["postAssets", field], value),
    )
}

/// Procured assets merged into the post being composed
pub fn on_fetched_procure_post_assets(assets: ProcuredAssets) -> Transition {
    Transition::at(ActionType::FetchedProcurePostAssets, &["postAssets"], assets)
}

pub fn on_dismiss_shared_link() -> Transition {
    Transition::bare(ActionType::DismissSharedLink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducers::broadcast_composer_reducer;
    use crate::state::RefocusInput;
    use crate::store::Store;
    use composer_api::{ApiCall, FixtureApi, Fixtures, RecordingApi, extract_uris};

    const WINDOW: Duration = Duration::from_millis(1000);

    fn fixtures() -> Fixtures {
        let mut fixtures = Fixtures::default();
        fixtures.post_assets.insert(
            "https://acme.test/b".to_string(),
            ProcuredAssets {
                title: Some("B".to_string()),
                picture: Some("https://acme.test/b.png".to_string()),
                ..Default::default()
            },
        );
        fixtures
    }

    fn setup() -> (
        Store<BroadcastComposerState>,
        BroadcastComposerActions,
        RecordingApi<FixtureApi>,
    ) {
        let api = RecordingApi::new(FixtureApi::new(fixtures()));
        let actions = BroadcastComposerActions::new(Arc::new(api.clone()), Arc::new(extract_uris), WINDOW);
        let store = Store::new("broadcastComposer", broadcast_composer_reducer());
        (store, actions, api)
    }

    fn procured(api: &RecordingApi<FixtureApi>) -> Vec<String> {
        api.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::ProcurePostAssets(url) => Some(url),
                _ => None,
            })
            .collect()
    }

    async fn settle() {
        tokio::time::sleep(WINDOW + Duration::from_millis(1)).await;
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_inputs_detect_once_with_last_message() {
        let (store, actions, api) = setup();

        store.dispatch(actions.on_message_input_with_link_detection("#message", 5, "see https://acme.test/a"));
        tokio::time::sleep(Duration::from_millis(500)).await;
        store.dispatch(actions.on_message_input_with_link_detection("#message", 5, "see https://acme.test/b"));

        // The message itself is updated without waiting
        assert_eq!(
            store.state().post_assets.message.as_deref(),
            Some("see https://acme.test/b")
        );
        assert_eq!(store.state().post_assets.shared_link, None);
        assert!(actions.detection_pending());

        settle().await;

        assert_eq!(procured(&api), vec!["https://acme.test/b".to_string()]);
        let assets = store.state().post_assets;
        assert_eq!(assets.shared_link.as_deref(), Some("https://acme.test/b"));
        assert_eq!(assets.title.as_deref(), Some("B"));
        assert_eq!(assets.picture.as_deref(), Some("https://acme.test/b.png"));
        assert_eq!(assets.message.as_deref(), Some("see https://acme.test/b"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissed_links_are_skipped() {
        let (store, actions, api) = setup();
        store.dispatch(actions.on_message_input_with_link_detection("#message", 0, "https://acme.test/a"));
        settle().await;
        store.dispatch(on_dismiss_shared_link());
        assert_eq!(store.state().dismissed_links, vec!["https://acme.test/a".to_string()]);

        store.dispatch(actions.on_message_input_with_link_detection(
            "#message",
            0,
            "https://acme.test/a and https://acme.test/b",
        ));
        settle().await;

        assert_eq!(store.state().post_assets.shared_link.as_deref(), Some("https://acme.test/b"));
        assert_eq!(procured(&api).len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_only_dismissed_links_detect_nothing() {
        let (store, actions, api) = setup();
        store.dispatch(actions.on_message_input_with_link_detection("#message", 0, "https://acme.test/b"));
        settle().await;
        store.dispatch(on_dismiss_shared_link());

        store.dispatch(actions.on_message_input_with_link_detection("#message", 0, "again https://acme.test/b"));
        settle().await;

        assert_eq!(store.state().post_assets.shared_link, None);
        assert_eq!(procured(&api).len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_attached_link_blocks_detection() {
        let (store, actions, api) = setup();
        store.dispatch(actions.on_message_input_with_link_detection("#message", 0, "https://acme.test/b"));
        settle().await;

        store.dispatch(actions.on_message_input_with_link_detection("#message", 0, "https://other.test"));
        settle().await;

        assert_eq!(store.state().post_assets.shared_link.as_deref(), Some("https://acme.test/b"));
        assert_eq!(procured(&api), vec!["https://acme.test/b".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_message_without_links_detects_nothing() {
        let (store, actions, api) = setup();
        store.dispatch(actions.on_message_input_with_link_detection("#message", 0, "just text"));
        settle().await;

        assert!(api.calls().is_empty());
        assert_eq!(store.state().post_assets.shared_link, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_procurement_keeps_link_and_records_error() {
        let (store, actions, _api) = setup();
        store.dispatch(actions.on_message_input_with_link_detection("#message", 0, "https://unknown.test"));
        settle().await;

        let state = store.state();
        assert_eq!(state.post_assets.shared_link.as_deref(), Some("https://unknown.test"));
        assert_eq!(state.post_assets.title, None);
        let error = state.last_fetch_error.unwrap_or_default();
        assert!(error.starts_with("procure post assets for https://unknown.test"), "{}", error);
    }

    #[test]
    fn test_refocus_precedes_input() {
        let store = Store::new("broadcastComposer", broadcast_composer_reducer());
        let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
        let log = Arc::clone(&seen);
        store.subscribe(move |state: &BroadcastComposerState| {
            log.lock().unwrap().push((
                state.refocus_input.selector.clone(),
                state.post_assets.title.clone(),
            ));
        });

        store.dispatch(on_title_input("#title", 3, "Hey"));

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (Some("#title".to_string()), None),
                (Some("#title".to_string()), Some("Hey".to_string())),
            ]
        );
        assert_eq!(
            store.state().refocus_input,
            RefocusInput {
                selector: Some("#title".to_string()),
                cursor_position: Some(3),
            }
        );
    }

    #[test]
    fn test_inputs_write_their_own_field() {
        let store = Store::new("broadcastComposer", broadcast_composer_reducer());
        store.dispatch(on_message_input("#message", 1, "m"));
        store.dispatch(on_picture_input("#picture", 2, "p.png"));
        store.dispatch(on_description_input("#description", 3, "d"));

        let state = store.state();
        assert_eq!(state.post_assets.message.as_deref(), Some("m"));
        assert_eq!(state.post_assets.picture.as_deref(), Some("p.png"));
        assert_eq!(state.post_assets.description.as_deref(), Some("d"));
        assert_eq!(state.refocus_input.selector.as_deref(), Some("#description"));
        assert_eq!(state.refocus_input.cursor_position, Some(3));
    }

    #[test]
    fn test_dismiss_is_bare_transition() {
        let transition = on_dismiss_shared_link();
        assert_eq!(transition.kind, ActionType::DismissSharedLink);
        assert_eq!(transition.payload, None);
    }
}
