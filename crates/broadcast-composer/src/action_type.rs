//! Action type vocabulary
//!
//! Every state transition is tagged with exactly one `ActionType`. Tags
//! render as stable `SCREAMING_SNAKE_CASE` strings (e.g. `FETCHED_CHANNELS`)
//! for logging and parse back from them.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Tag of a state transition
///
/// A store's reducer handles a subset of these; tags it doesn't handle leave
/// its state unchanged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, IntoStaticStr, EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    // Composer inputs
    DescriptionInput,
    MessageInput,
    PictureInput,
    TitleInput,
    RefocusInput,

    // Shared link lifecycle
    DetectSharedLink,
    DismissSharedLink,

    // Recipient selector UI
    PostModeChange,
    RecipientSelectionItemChange,
    RecipientsDropdownToggle,

    // Fetch results
    FetchedBroadcastRecipientCounts,
    FetchedChannels,
    FetchedProcurePostAssets,
    FetchedPublishableGroups,
    FetchedPublishableSubchannels,
    FetchedPublishableUsers,
    FetchFailed,
}
