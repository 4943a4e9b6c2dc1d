use polyzone_core::{bounding_box, centroid, BoundingBox, Point, RegionStyle};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dirty_grid;

/// Lifecycle of a region.
///
/// Any state other than `Uninitialized` means the slot has been handed out.
/// The marker is left in place when a gesture ends and only changes on the
/// next gesture-down that resolves to this region, or on a pool reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionState {
    #[default]
    Uninitialized,
    Initializing,
    Moving,
    Dragging,
}

impl fmt::Display for RegionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Initializing => write!(f, "initializing"),
            Self::Moving => write!(f, "moving"),
            Self::Dragging => write!(f, "dragging"),
        }
    }
}

/// One user-editable region: an ordered vertex list closing last-to-first.
///
/// A region is plain data. The interaction engine decides how vertices move;
/// this type only offers accessors and cyclic index arithmetic. It is not
/// synchronised and is meant to be owned by a single engine on one thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    vertices: Vec<Point>,
    state: RegionState,
    style: RegionStyle,
}

impl Region {
    /// Creates an empty, uninitialized region with the given style.
    pub fn new(style: RegionStyle) -> Self {
        Self {
            vertices: Vec::new(),
            state: RegionState::Uninitialized,
            style,
        }
    }

    pub fn state(&self) -> RegionState {
        self.state
    }

    pub fn set_state(&mut self, state: RegionState) {
        self.state = state;
    }

    pub fn is_initialized(&self) -> bool {
        self.state != RegionState::Uninitialized
    }

    pub fn style(&self) -> RegionStyle {
        self.style
    }

    pub fn fill_style(&self) -> u32 {
        self.style.fill
    }

    pub fn corner_style(&self) -> u32 {
        self.style.corner
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.vertices.get(index).copied()
    }

    /// Index of the first vertex equal to `p`.
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.vertices.iter().position(|v| *v == p)
    }

    /// Appends a vertex.
    pub fn add_point(&mut self, p: Point) -> &mut Self {
        self.vertices.push(p);
        self
    }

    /// Replaces the vertex at `index`, or appends when `index` is past the end.
    pub fn set_point(&mut self, index: usize, p: Point) -> &mut Self {
        match self.vertices.get_mut(index) {
            Some(v) => *v = p,
            None => self.vertices.push(p),
        }
        self
    }

    /// Replaces the whole vertex list.
    pub fn set_vertices(&mut self, vertices: Vec<Point>) {
        self.vertices = vertices;
    }

    /// Index of the vertex diametrically opposite `index`.
    ///
    /// Only defined for an even vertex count; `None` otherwise.
    pub fn opposite(&self, index: usize) -> Option<usize> {
        let n = self.vertices.len();
        if n % 2 != 0 {
            return None;
        }
        let half = n / 2;
        Some(if index < half {
            index + half
        } else {
            index - half
        })
    }

    /// Cyclic successor: the last index wraps to 0.
    pub fn next(&self, index: usize) -> usize {
        if index + 1 >= self.vertices.len() {
            0
        } else {
            index + 1
        }
    }

    /// Cyclic predecessor: 0 wraps to the last index.
    pub fn previous(&self, index: usize) -> usize {
        if index == 0 {
            self.vertices.len().saturating_sub(1)
        } else {
            index - 1
        }
    }

    /// Translates every vertex by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for v in &mut self.vertices {
            *v = v.offset(dx, dy);
        }
    }

    /// Translates a single vertex and returns its new position.
    pub fn translate_vertex(&mut self, index: usize, dx: i32, dy: i32) -> Option<Point> {
        let v = self.vertices.get_mut(index)?;
        *v = v.offset(dx, dy);
        Some(*v)
    }

    pub fn centroid(&self) -> Option<Point> {
        centroid(&self.vertices)
    }

    pub fn bounding_box(&self) -> Option<BoundingBox> {
        bounding_box(&self.vertices)
    }

    /// Overlay-grid cells touched by this region's bounding box, in emission
    /// order (unsorted).
    ///
    /// * `columns` - number of grid columns
    /// * `cell_width` - cell width in display units
    /// * `cell_height` - cell height in display units
    pub fn dirty_cells(&self, columns: i32, cell_width: i32, cell_height: i32) -> Option<Vec<i32>> {
        dirty_grid::dirty_cells(self.bounding_box(), columns, cell_width, cell_height)
    }

    /// Drops all vertices and returns to `Uninitialized`.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.state = RegionState::Uninitialized;
    }
}
