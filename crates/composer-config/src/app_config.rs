//! Application configuration
//!
//! Configuration loaded from `.broadcast-composer.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration loaded from `.broadcast-composer.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Quiet window before a typed message is scanned for a shared link
    #[serde(default = "default_link_detection_debounce_ms")]
    pub link_detection_debounce_ms: u64,

    /// Quiet window coalescing selection changes into one recipient count fetch
    #[serde(default)]
    pub recipient_count_debounce_ms: u64,

    /// Quiet window applied to text inputs before they reach the store
    #[serde(default = "default_input_debounce_ms")]
    pub input_debounce_ms: u64,

    /// Quiet window coalescing state changes into one render
    #[serde(default)]
    pub render_debounce_ms: u64,

    /// JSON fixtures served by the publishing API (empty data when unset)
    #[serde(default)]
    pub fixtures_path: Option<PathBuf>,
}

fn default_link_detection_debounce_ms() -> u64 {
    1000
}

fn default_input_debounce_ms() -> u64 {
    300
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            link_detection_debounce_ms: default_link_detection_debounce_ms(),
            recipient_count_debounce_ms: 0,
            input_debounce_ms: default_input_debounce_ms(),
            render_debounce_ms: 0,
            fixtures_path: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::parse(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML content
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn link_detection_debounce(&self) -> Duration {
        Duration::from_millis(self.link_detection_debounce_ms)
    }

    pub fn recipient_count_debounce(&self) -> Duration {
        Duration::from_millis(self.recipient_count_debounce_ms)
    }

    pub fn input_debounce(&self) -> Duration {
        Duration::from_millis(self.input_debounce_ms)
    }

    pub fn render_debounce(&self) -> Duration {
        Duration::from_millis(self.render_debounce_ms)
    }

    /// Longest chain of debounce windows a single input can trigger
    pub fn settle_time(&self) -> Duration {
        self.input_debounce()
            + self.link_detection_debounce().max(self.recipient_count_debounce())
            + self.render_debounce()
    }
}
