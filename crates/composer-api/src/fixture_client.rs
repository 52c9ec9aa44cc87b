//! In-memory publishing API backed by JSON fixtures
//!
//! Serves the widgets without a backend: records come from a fixture file,
//! link assets are looked up by URL and recipient counts are computed from
//! the selection itself.

use crate::client::PublishingApi;
use crate::types::{Channel, Group, ProcuredAssets, RecipientCounts, SelectedIds, Subchannel, User};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by the fixture-backed client
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to read fixtures from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid fixtures: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No post assets known for link {0}")]
    UnknownLink(String),
}

/// Fixture file content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub channels: Vec<Channel>,

    #[serde(default)]
    pub groups: Vec<Group>,

    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub subchannels: Vec<Subchannel>,

    /// Post assets keyed by shared link URL
    #[serde(default)]
    pub post_assets: BTreeMap<String, ProcuredAssets>,
}

/// Publishing API serving fixture data
#[derive(Debug, Clone, Default)]
pub struct FixtureApi {
    fixtures: Fixtures,
}

impl FixtureApi {
    pub fn new(fixtures: Fixtures) -> Self {
        Self { fixtures }
    }

    /// Load fixtures from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let api = Self::from_json(&content)?;
        log::info!("Loaded API fixtures from {}", path.display());
        Ok(api)
    }

    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn fixtures(&self) -> &Fixtures {
        &self.fixtures
    }
}

/// Count selected ids per selection type
///
/// `selected_subchannel_ids: [1, 2]` becomes `subchannel: 2`; `total` sums
/// every type.
fn count_selected(selected: &SelectedIds) -> RecipientCounts {
    let mut counts: RecipientCounts = selected
        .iter()
        .map(|(key, ids)| {
            let kind = key
                .strip_prefix("selected_")
                .and_then(|k| k.strip_suffix("_ids"))
                .unwrap_or(key);
            (kind.to_string(), ids.len() as u64)
        })
        .collect();
    let total = counts.values().sum();
    counts.insert("total".to_string(), total);
    counts
}

#[async_trait]
impl PublishingApi for FixtureApi {
    async fn fetch_channels(&self) -> anyhow::Result<Vec<Channel>> {
        Ok(self.fixtures.channels.clone())
    }

    async fn fetch_publishable_groups(&self) -> anyhow::Result<Vec<Group>> {
        Ok(self.fixtures.groups.clone())
    }

    async fn fetch_publishable_users(&self) -> anyhow::Result<Vec<User>> {
        Ok(self.fixtures.users.clone())
    }

    async fn fetch_publishable_subchannels(&self) -> anyhow::Result<Vec<Subchannel>> {
        Ok(self.fixtures.subchannels.clone())
    }

    async fn procure_post_assets(&self, url: &str) -> anyhow::Result<ProcuredAssets> {
        self.fixtures
            .post_assets
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::UnknownLink(url.to_string()).into())
    }

    async fn recipient_counts(&self, selected: &SelectedIds) -> anyhow::Result<RecipientCounts> {
        Ok(count_selected(selected))
    }
}
