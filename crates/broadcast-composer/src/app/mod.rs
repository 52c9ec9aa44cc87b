//! Widget wiring
//!
//! Each widget owns a store, its action creators and the debouncers sitting
//! between UI events and the store. The two widgets share nothing but the
//! publishing API client.

pub mod broadcast_composer;
pub mod events;
pub mod recipient_selector;
pub mod render;

pub use broadcast_composer::BroadcastComposerApp;
pub use events::{TextField, UiEvent};
pub use recipient_selector::RecipientSelectorApp;
pub use render::subscribe_debounced;
