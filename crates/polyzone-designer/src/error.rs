//! Error types for the designer crate.
//!
//! Only engine construction and re-layout can fail. Gesture handling and
//! geometry queries report empty results through `Option` instead.

use polyzone_settings::ConfigError;
use thiserror::Error;

/// Errors raised while configuring an interaction engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DesignerError {
    /// The engine configuration failed validation.
    #[error("Invalid engine configuration: {0}")]
    Config(#[from] ConfigError),

    /// The display bounds handed over by the host were rejected.
    #[error("Invalid layout: {0}")]
    Layout(#[from] polyzone_core::Error),
}

/// Result type alias for designer operations.
pub type DesignerResult<T> = Result<T, DesignerError>;
