//! Broadcast Composer Reducer

use super::{HandleActions, merge_action_payload};
use crate::action_type::ActionType;
use crate::actions::Transition;
use crate::state::{BroadcastComposerState, PostAssets};

/// Reducer of the broadcast composer store
pub fn broadcast_composer_reducer() -> HandleActions<BroadcastComposerState> {
    HandleActions::new(BroadcastComposerState::default())
        .on(ActionType::DescriptionInput, merge_action_payload)
        .on(ActionType::DetectSharedLink, merge_action_payload)
        .on(ActionType::DismissSharedLink, dismiss_shared_link)
        .on(ActionType::FetchedChannels, merge_action_payload)
        .on(ActionType::FetchedProcurePostAssets, merge_action_payload)
        .on(ActionType::FetchFailed, merge_action_payload)
        .on(ActionType::MessageInput, merge_action_payload)
        .on(ActionType::PictureInput, merge_action_payload)
        .on(ActionType::RefocusInput, merge_action_payload)
        .on(ActionType::TitleInput, merge_action_payload)
}

/// Remember the attached link as dismissed and detach it
///
/// Message and picture survive; title and description belonged to the link
/// preview and are dropped with it. An empty link is not remembered.
pub fn dismiss_shared_link(
    mut state: BroadcastComposerState,
    _transition: &Transition,
) -> BroadcastComposerState {
    let PostAssets {
        message,
        picture,
        shared_link,
        ..
    } = std::mem::take(&mut state.post_assets);

    match shared_link.filter(|link| !link.is_empty()) {
        Some(link) => {
            log::debug!("Dismissed shared link {}", link);
            state.dismissed_links.push(link);
        }
        None => log::debug!("Dismiss without a shared link attached"),
    }

    state.post_assets = PostAssets {
        message,
        picture,
        shared_link: None,
        ..Default::default()
    };
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn composing(shared_link: Option<&str>) -> BroadcastComposerState {
        BroadcastComposerState {
            post_assets: PostAssets {
                message: Some("m".to_string()),
                title: Some("t".to_string()),
                description: Some("d".to_string()),
                picture: Some("p".to_string()),
                shared_link: shared_link.map(str::to_string),
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_dismiss_shared_link_drops_preview_fields() {
        let reducer = broadcast_composer_reducer();
        let state = reducer.reduce(
            Some(composing(Some("http://x"))),
            &Transition::bare(ActionType::DismissSharedLink),
        );

        assert_eq!(state.dismissed_links, vec!["http://x".to_string()]);
        assert_eq!(
            state.post_assets,
            PostAssets {
                message: Some("m".to_string()),
                picture: Some("p".to_string()),
                shared_link: None,
                title: None,
                description: None,
            }
        );
        assert_eq!(
            serde_json::to_value(&state.post_assets).unwrap(),
            json!({"message": "m", "picture": "p", "sharedLink": null, "title": null, "description": null})
        );
    }

    #[test]
    fn test_dismissed_links_accumulate() {
        let reducer = broadcast_composer_reducer();
        let mut state = reducer.reduce(
            Some(composing(Some("http://a"))),
            &Transition::bare(ActionType::DismissSharedLink),
        );
        state.post_assets.shared_link = Some("http://b".to_string());
        let state = reducer.reduce(Some(state), &Transition::bare(ActionType::DismissSharedLink));

        assert_eq!(state.dismissed_links, vec!["http://a".to_string(), "http://b".to_string()]);
    }

    #[test]
    fn test_dismiss_without_link_keeps_list() {
        let state = dismiss_shared_link(composing(None), &Transition::bare(ActionType::DismissSharedLink));
        assert!(state.dismissed_links.is_empty());
        assert_eq!(state.post_assets.message.as_deref(), Some("m"));
        assert_eq!(state.post_assets.title, None);
    }

    #[test]
    fn test_dismiss_empty_link_keeps_list() {
        let state = dismiss_shared_link(composing(Some("")), &Transition::bare(ActionType::DismissSharedLink));
        assert!(state.dismissed_links.is_empty());
        assert_eq!(state.post_assets.shared_link, None);
        assert_eq!(state.post_assets.picture.as_deref(), Some("p"));
    }

    #[test]
    fn test_message_input_merges_into_post_assets() {
        let reducer = broadcast_composer_reducer();
        let state = reducer.reduce(
            Some(composing(Some("http://x"))),
            &Transition::new(ActionType::MessageInput, json!({"postAssets": {"message": "new"}})),
        );
        assert_eq!(state.post_assets.message.as_deref(), Some("new"));
        assert_eq!(state.post_assets.title.as_deref(), Some("t"));
        assert_eq!(state.post_assets.shared_link.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_selector_tags_are_ignored() {
        let reducer = broadcast_composer_reducer();
        let start = composing(Some("http://x"));
        let state = reducer.reduce(
            Some(start.clone()),
            &Transition::new(ActionType::PostModeChange, json!({"postMode": "socialBlast"})),
        );
        assert_eq!(state, start);
    }

    #[test]
    fn test_fetch_failed_records_error() {
        let reducer = broadcast_composer_reducer();
        let state = reducer.reduce(
            Some(BroadcastComposerState::default()),
            &Transition::new(ActionType::FetchFailed, json!({"lastFetchError": "boom"})),
        );
        assert_eq!(state.last_fetch_error.as_deref(), Some("boom"));
    }
}
