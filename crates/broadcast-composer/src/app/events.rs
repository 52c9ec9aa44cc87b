//! UI events
//!
//! Primitive values extracted from DOM events, one JSON object per event:
//!
//! ```json
//! {"event": "channel_filter_item_change", "channel_id": 5, "is_selected": true}
//! {"event": "text_input", "field": "message", "selector": "#message", "cursor_position": 4, "value": "hi"}
//! ```

use crate::state::{PostMode, SelectionType};
use composer_api::EntityId;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoStaticStr};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    // Recipient selector
    RecipientSelectionItemChange {
        selection_type: SelectionType,
        is_selected: bool,
        ids: Vec<EntityId>,
    },
    QuickpickSubchannelItemChange {
        channel_name: String,
        is_selected: bool,
    },
    ChannelFilterItemChange {
        channel_id: EntityId,
        is_selected: bool,
    },
    RecipientsDropdownToggle,
    PostModeChange {
        post_mode: PostMode,
    },

    // Broadcast composer
    TextInput {
        field: TextField,
        selector: String,
        cursor_position: usize,
        value: String,
    },
    DismissSharedLink,
}

/// Text inputs of the composer form
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TextField {
    Message,
    Title,
    Picture,
    Description,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_events() {
        let event: UiEvent = serde_json::from_str(
            r#"{"event": "recipient_selection_item_change", "selection_type": "group", "is_selected": true, "ids": [1, 2]}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            UiEvent::RecipientSelectionItemChange {
                selection_type: SelectionType::Group,
                is_selected: true,
                ids: vec![1, 2],
            }
        );

        let event: UiEvent =
            serde_json::from_str(r#"{"event": "post_mode_change", "post_mode": "socialBlast"}"#).unwrap();
        assert_eq!(
            event,
            UiEvent::PostModeChange {
                post_mode: PostMode::SocialBlast
            }
        );

        let event: UiEvent = serde_json::from_str(r#"{"event": "recipients_dropdown_toggle"}"#).unwrap();
        assert_eq!(event, UiEvent::RecipientsDropdownToggle);
    }

    #[test]
    fn test_parse_text_input() {
        let event: UiEvent = serde_json::from_str(
            r##"{"event": "text_input", "field": "message", "selector": "#message", "cursor_position": 4, "value": "hi"}"##,
        )
        .unwrap();
        assert_eq!(
            event,
            UiEvent::TextInput {
                field: TextField::Message,
                selector: "#message".to_string(),
                cursor_position: 4,
                value: "hi".to_string(),
            }
        );
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        assert!(serde_json::from_str::<UiEvent>(r#"{"event": "drag_and_drop"}"#).is_err());
    }
}
