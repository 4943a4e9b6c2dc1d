//! Pointer events delivered by the host.
//!
//! A gesture is one `Down`, zero or more `Move` and one terminal `Up` or
//! `Cancel`. Ordering is not validated; the host is expected to be well formed.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::Point;

/// Gesture phase of a pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

impl PointerPhase {
    /// `Up` and `Cancel` both end a gesture.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Up | Self::Cancel)
    }
}

/// A single pointer event in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: i32,
    pub y: i32,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: i32, y: i32) -> Self {
        Self { phase, x, y }
    }

    pub fn down(x: i32, y: i32) -> Self {
        Self::new(PointerPhase::Down, x, y)
    }

    pub fn moved(x: i32, y: i32) -> Self {
        Self::new(PointerPhase::Move, x, y)
    }

    pub fn up(x: i32, y: i32) -> Self {
        Self::new(PointerPhase::Up, x, y)
    }

    pub fn cancel(x: i32, y: i32) -> Self {
        Self::new(PointerPhase::Cancel, x, y)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

impl fmt::Display for PointerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} at ({}, {})", self.phase, self.x, self.y)
    }
}
