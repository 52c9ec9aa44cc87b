use composer_api::{Channel, EntityId, Group, RecipientCounts, SelectedIds, Subchannel, User};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};

/// Which recipient-targeting context is active
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum PostMode {
    /// Post to social subchannels
    #[default]
    SocialPost,
    /// Blast to groups and users
    SocialBlast,
}

/// Kind of entity a selection refers to
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SelectionType {
    Channel,
    Subchannel,
    Group,
    User,
}

/// Entity id -> selected flag
///
/// A missing id was never touched, which is not the same as `false`.
pub type SelectionMap = BTreeMap<EntityId, bool>;

/// Publishable entities per entity type, in render order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publishable {
    #[serde(default)]
    pub subchannel: Vec<Subchannel>,

    #[serde(default)]
    pub group: Vec<Group>,

    #[serde(default)]
    pub user: Vec<User>,
}

/// Selection, publishable entities and counts of one post mode
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientTarget {
    #[serde(default)]
    pub selections: BTreeMap<SelectionType, SelectionMap>,

    #[serde(default)]
    pub publishable: Publishable,

    /// Last fetched recipient counts, replaced wholesale
    #[serde(default)]
    pub placard_counts: RecipientCounts,
}

impl RecipientTarget {
    /// Selection flag of an entity, `None` if it was never touched
    pub fn selection(&self, selection_type: SelectionType, id: EntityId) -> Option<bool> {
        self.selections
            .get(&selection_type)
            .and_then(|selection| selection.get(&id))
            .copied()
    }

    /// Ids flagged as selected, keyed `selected_<type>_ids`
    ///
    /// Every touched selection type gets a key, even when nothing of that
    /// type is currently selected.
    pub fn selected_ids(&self) -> SelectedIds {
        self.selections
            .iter()
            .map(|(selection_type, selection)| {
                let ids = selection
                    .iter()
                    .filter(|(_, selected)| **selected)
                    .map(|(id, _)| *id)
                    .collect();
                (format!("selected_{}_ids", selection_type), ids)
            })
            .collect()
    }

    /// Ids of publishable subchannels belonging to a channel
    pub fn subchannel_ids_of_channel(&self, channel_name: &str) -> Vec<EntityId> {
        self.publishable
            .subchannel
            .iter()
            .filter(|subchannel| subchannel.channel_name == channel_name)
            .map(|subchannel| subchannel.id)
            .collect()
    }
}

/// State of the recipient selector widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipientSelectorState {
    /// All channels, sorted by name
    #[serde(default)]
    pub channels: Vec<Channel>,

    #[serde(default)]
    pub post_mode: PostMode,

    #[serde(default)]
    pub recipients_dropdown_toggle: bool,

    #[serde(default)]
    pub social_post: RecipientTarget,

    #[serde(default)]
    pub social_blast: RecipientTarget,

    /// Description of the most recent failed fetch
    #[serde(default)]
    pub last_fetch_error: Option<String>,
}

impl RecipientSelectorState {
    pub fn target(&self, post_mode: PostMode) -> &RecipientTarget {
        match post_mode {
            PostMode::SocialPost => &self.social_post,
            PostMode::SocialBlast => &self.social_blast,
        }
    }

    pub fn target_mut(&mut self, post_mode: PostMode) -> &mut RecipientTarget {
        match post_mode {
            PostMode::SocialPost => &mut self.social_post,
            PostMode::SocialBlast => &mut self.social_blast,
        }
    }

    /// Sub-tree of the current post mode
    pub fn active_target(&self) -> &RecipientTarget {
        self.target(self.post_mode)
    }
}
