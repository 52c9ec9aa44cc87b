//! Configuration paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/broadcast-composer/`
//! - macOS: `~/Library/Application Support/broadcast-composer/`
//! - Windows: `%APPDATA%\broadcast-composer\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "broadcast-composer";

/// Name of the config file looked up in the current working directory
pub const LOCAL_CONFIG_FILE: &str = ".broadcast-composer.toml";

/// Get the application config directory (not created)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to the global app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Get path to the local app config file (in CWD)
pub fn local_config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()?.join(LOCAL_CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paths() {
        if let Ok(global) = app_config_path() {
            assert!(global.ends_with("broadcast-composer/config.toml"));
        }
        let local = local_config_path().unwrap();
        assert!(local.ends_with(LOCAL_CONFIG_FILE));
    }
}
