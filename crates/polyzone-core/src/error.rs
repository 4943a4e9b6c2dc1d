//! Error handling for polyzone
//!
//! The interaction engine itself reports local, recoverable conditions through
//! `Option` returns. The error types here cover construction-time input:
//! display bounds handed over by the host and numeric shape codes.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Display bounds with a negative extent
    #[error("Invalid display bounds ({left}, {top}, {right}, {bottom}): {reason}")]
    InvalidBounds {
        /// Left edge.
        left: i32,
        /// Top edge.
        top: i32,
        /// Right edge.
        right: i32,
        /// Bottom edge.
        bottom: i32,
        /// Why the bounds were rejected.
        reason: String,
    },

    /// Numeric shape code outside the known variants
    #[error("Unknown shape code: {code}")]
    UnknownShapeCode {
        /// The code that could not be mapped.
        code: i32,
    },

    /// Shape name that could not be parsed
    #[error("Unknown shape name: {name}")]
    UnknownShapeName {
        /// The name that could not be parsed.
        name: String,
    },
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
