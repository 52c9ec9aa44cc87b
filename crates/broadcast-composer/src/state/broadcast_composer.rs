use composer_api::Channel;
use serde::{Deserialize, Serialize};

/// Content of the post being composed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostAssets {
    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub picture: Option<String>,

    /// Link the preview is built from, `None` when no link is attached
    #[serde(default)]
    pub shared_link: Option<String>,
}

impl PostAssets {
    /// The attached shared link, ignoring empty strings
    pub fn active_shared_link(&self) -> Option<&str> {
        self.shared_link.as_deref().filter(|link| !link.is_empty())
    }
}

/// Input to focus after the next render, with the cursor position to restore
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefocusInput {
    #[serde(default)]
    pub selector: Option<String>,

    #[serde(default)]
    pub cursor_position: Option<usize>,
}

/// State of the broadcast composer widget
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastComposerState {
    /// Channels to render previews for, sorted by name
    #[serde(default)]
    pub channels: Vec<Channel>,

    /// Shared links the author dismissed; they are never detected again
    #[serde(default)]
    pub dismissed_links: Vec<String>,

    #[serde(default)]
    pub post_assets: PostAssets,

    #[serde(default)]
    pub refocus_input: RefocusInput,

    /// Description of the most recent failed fetch
    #[serde(default)]
    pub last_fetch_error: Option<String>,
}

impl BroadcastComposerState {
    pub fn is_dismissed(&self, link: &str) -> bool {
        self.dismissed_links.iter().any(|dismissed| dismissed == link)
    }
}
