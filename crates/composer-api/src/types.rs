//! Publishing API data transfer objects
//!
//! These types represent the records returned by the publishing backend.
//! Fields the widgets don't interpret are kept in `extra` so they survive
//! a trip through the state stores untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Identifier of any publishable entity (channel, subchannel, group, user)
pub type EntityId = u64;

/// A record identified by id and display name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedEntity {
    pub id: EntityId,

    pub name: String,

    /// Any further fields sent by the backend
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NamedEntity {
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }
}

/// A social channel (e.g. "twitter")
pub type Channel = NamedEntity;

/// A publishable recipient group
pub type Group = NamedEntity;

/// A publishable user
pub type User = NamedEntity;

/// A publishable subchannel (an account on a channel)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subchannel {
    pub id: EntityId,

    pub name: String,

    /// Name of the channel this subchannel belongs to
    pub channel_name: String,

    /// Id of the primary subchannel this one is grouped under
    #[serde(default)]
    pub primary_subchannel_id: Option<EntityId>,

    /// Subchannel type as reported by the backend (e.g. "page", "profile")
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Post assets procured for a shared link
///
/// Only the fields the backend filled in are serialized, so merging this
/// into an existing composition never clears what the author typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcuredAssets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared_link: Option<String>,
}

/// Aggregate recipient counts keyed by count name (e.g. "subchannel", "total")
pub type RecipientCounts = BTreeMap<String, u64>;

/// Selected ids per selection type, keyed `selected_<type>_ids`
pub type SelectedIds = BTreeMap<String, Vec<EntityId>>;
