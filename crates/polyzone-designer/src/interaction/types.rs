//! Interaction type definitions: Grab, Gesture, TouchResponse, GuideLine, CircleGuides.

use polyzone_core::Point;
use serde::Serialize;

/// What the current gesture took hold of on gesture-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grab {
    /// A vertex of the active region, by index.
    Vertex(usize),
    /// The centre of the active region, as it was when grabbed.
    Center(Point),
}

/// Gesture-scoped mutable state, reset when a gesture ends.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Gesture {
    pub(crate) start: Point,
    pub(crate) last: Point,
    pub(crate) active: Option<usize>,
    pub(crate) grab: Option<Grab>,
}

impl Gesture {
    pub(crate) fn begin(at: Point) -> Self {
        Self {
            start: at,
            last: at,
            active: None,
            grab: None,
        }
    }
}

/// What a pointer event did to the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TouchResponse {
    /// Gesture-down grabbed a vertex.
    Dragging { slot: usize, vertex: usize },
    /// Gesture-down grabbed a region centre.
    Moving { slot: usize },
    /// Gesture-down allocated a fresh region.
    Created { slot: usize },
    /// Gesture-down found no free region; the gesture is ignored.
    PoolExhausted,
    /// A move changed the active region's geometry.
    Updated { slot: usize },
    /// The gesture ended.
    Finished { slot: Option<usize> },
    /// The event had no effect.
    Ignored,
}

impl TouchResponse {
    /// `true` when the host should redraw.
    pub fn needs_redraw(&self) -> bool {
        matches!(self, Self::Updated { .. } | Self::Finished { slot: Some(_) })
    }
}

/// A straight guide segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuideLine {
    pub from: Point,
    pub to: Point,
}

/// Four chord guides inside a circle, at a third of the radius from the
/// centre on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CircleGuides {
    pub left: GuideLine,
    pub right: GuideLine,
    pub top: GuideLine,
    pub bottom: GuideLine,
}
