//! State trees of the two widgets
//!
//! Each store owns one tree exclusively. Both trees serialize to camelCase
//! JSON, which is the shape action payloads are written against.

mod broadcast_composer;
mod recipient_selector;

pub use broadcast_composer::{BroadcastComposerState, PostAssets, RefocusInput};
pub use recipient_selector::{
    PostMode, Publishable, RecipientSelectorState, RecipientTarget, SelectionMap, SelectionType,
};
