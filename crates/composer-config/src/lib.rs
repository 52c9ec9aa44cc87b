//! Configuration for the broadcast composer
//!
//! This crate provides:
//! - Config file discovery (CWD first, then the user config directory)
//! - Application configuration (AppConfig) with debounce windows and the
//!   fixture source for the publishing API

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::AppConfig;
pub use config_file::load_config_file;
