//! Publishing API client trait
//!
//! This module defines the `PublishingApi` trait that every client
//! implementation must satisfy. The widgets only ever talk to the backend
//! through this trait, so transports can be swapped without touching the
//! state pipeline.

use crate::types::{Channel, Group, ProcuredAssets, RecipientCounts, SelectedIds, Subchannel, User};
use async_trait::async_trait;

/// Publishing API client trait
///
/// All exchanges are request/response. Implementations must be
/// `Send + Sync` so a single client can be shared by both widgets and by
/// the tasks their action creators spawn.
///
/// # Example
///
/// ```rust,ignore
/// use composer_api::{Channel, PublishingApi};
///
/// async fn channel_names(api: &dyn PublishingApi) -> anyhow::Result<Vec<String>> {
///     let channels = api.fetch_channels().await?;
///     Ok(channels.into_iter().map(|c| c.name).collect())
/// }
/// ```
#[async_trait]
pub trait PublishingApi: Send + Sync {
    /// Fetch all channels
    async fn fetch_channels(&self) -> anyhow::Result<Vec<Channel>>;

    /// Fetch groups the current account may publish to
    async fn fetch_publishable_groups(&self) -> anyhow::Result<Vec<Group>>;

    /// Fetch users the current account may publish to
    async fn fetch_publishable_users(&self) -> anyhow::Result<Vec<User>>;

    /// Fetch subchannels the current account may publish to
    async fn fetch_publishable_subchannels(&self) -> anyhow::Result<Vec<Subchannel>>;

    /// Procure preview assets (title, description, picture) for a shared link
    ///
    /// # Arguments
    ///
    /// * `url` - The link detected in the message
    async fn procure_post_assets(&self, url: &str) -> anyhow::Result<ProcuredAssets>;

    /// Compute aggregate recipient counts for a selection
    ///
    /// # Arguments
    ///
    /// * `selected` - Selected ids keyed `selected_<type>_ids`
    async fn recipient_counts(&self, selected: &SelectedIds) -> anyhow::Result<RecipientCounts>;
}
