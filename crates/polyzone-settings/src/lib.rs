//! Polyzone Settings Crate
//!
//! Handles engine configuration, validation and settings persistence.

pub mod config;
pub mod error;

pub use config::{Config, EngineSettings, GridSettings};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
