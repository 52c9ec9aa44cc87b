//! Recording publishing API client (decorator pattern)
//!
//! Wraps any `PublishingApi` implementation and records every call before
//! delegating. Clones share the same call log, so a handle kept by the
//! caller observes calls made through a clone handed to the widgets.

use crate::client::PublishingApi;
use crate::types::{Channel, Group, ProcuredAssets, RecipientCounts, SelectedIds, Subchannel, User};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// A call made through a `RecordingApi`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    FetchChannels,
    FetchPublishableGroups,
    FetchPublishableUsers,
    FetchPublishableSubchannels,
    ProcurePostAssets(String),
    RecipientCounts(SelectedIds),
}

/// Publishing API decorator recording all calls
#[derive(Debug, Clone)]
pub struct RecordingApi<C> {
    inner: C,
    calls: Arc<Mutex<Vec<ApiCall>>>,
}

impl<C: PublishingApi> RecordingApi<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of all calls made so far, oldest first
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded calls matching a predicate
    pub fn count(&self, predicate: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, call: ApiCall) {
        log::debug!("API call: {:?}", call);
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

#[async_trait]
impl<C: PublishingApi> PublishingApi for RecordingApi<C> {
    async fn fetch_channels(&self) -> anyhow::Result<Vec<Channel>> {
        self.record(ApiCall::FetchChannels);
        self.inner.fetch_channels().await
    }

    async fn fetch_publishable_groups(&self) -> anyhow::Result<Vec<Group>> {
        self.record(ApiCall::FetchPublishableGroups);
        self.inner.fetch_publishable_groups().await
    }

    async fn fetch_publishable_users(&self) -> anyhow::Result<Vec<User>> {
        self.record(ApiCall::FetchPublishableUsers);
        self.inner.fetch_publishable_users().await
    }

    async fn fetch_publishable_subchannels(&self) -> anyhow::Result<Vec<Subchannel>> {
        self.record(ApiCall::FetchPublishableSubchannels);
        self.inner.fetch_publishable_subchannels().await
    }

    async fn procure_post_assets(&self, url: &str) -> anyhow::Result<ProcuredAssets> {
        self.record(ApiCall::ProcurePostAssets(url.to_string()));
        self.inner.procure_post_assets(url).await
    }

    async fn recipient_counts(&self, selected: &SelectedIds) -> anyhow::Result<RecipientCounts> {
        self.record(ApiCall::RecipientCounts(selected.clone()));
        self.inner.recipient_counts(selected).await
    }
}
