//! # Polyzone Core
//!
//! Core types and utilities shared by the polyzone crates.
//! Provides integer geometry, the shape variant enumeration, region
//! styling identifiers, pointer events and the common error type.

pub mod error;
pub mod event;
pub mod geometry;
pub mod shape;
pub mod style;
pub mod types;

pub use error::{Error, Result};

pub use event::{PointerEvent, PointerPhase};

pub use geometry::{
    bounding_box, centroid, chord_length, distance, BoundingBox, DisplayBounds, Point,
};

pub use shape::ShapeVariant;

pub use style::{RegionStyle, StyleId, DEFAULT_PALETTE};

// Re-export type aliases for convenience
pub use types::{shared, thread_safe, Shared, ThreadSafe};
