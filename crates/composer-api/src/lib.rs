//! Publishing API boundary for the broadcast composer
//!
//! This crate provides a trait-based client for the publishing backend
//! (channels, publishable recipients, link asset procurement and recipient
//! counts) together with the link extraction used by the composer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              PublishingApi trait                 │
//! │  - fetch_channels()                              │
//! │  - fetch_publishable_*()                         │
//! │  - procure_post_assets() / recipient_counts()    │
//! └─────────────────────────────────────────────────┘
//!                        │
//!        ┌───────────────┴───────────────┐
//!        ▼                               ▼
//! ┌─────────────────┐         ┌─────────────────────┐
//! │ FixtureApi      │         │ RecordingApi        │
//! │ (in-memory)     │◄────────│ (decorator)         │
//! └─────────────────┘         └─────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use composer_api::{FixtureApi, PublishingApi, RecordingApi};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let api = RecordingApi::new(FixtureApi::from_file("fixtures.json")?);
//! let channels = api.fetch_channels().await?;
//! assert_eq!(api.calls().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod fixture_client;
pub mod recording_client;
pub mod types;
pub mod uris;

pub use client::PublishingApi;
pub use fixture_client::{ApiError, FixtureApi, Fixtures};
pub use recording_client::{ApiCall, RecordingApi};
pub use types::{
    Channel, EntityId, Group, NamedEntity, ProcuredAssets, RecipientCounts, SelectedIds,
    Subchannel, User,
};
pub use uris::extract_uris;
