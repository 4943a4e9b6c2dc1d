//! # Polyzone Designer
//!
//! Interaction engine for editing a bounded set of regions over a displayed
//! image with pointer gestures, and for reporting which overlay-grid cells
//! each region touches.
//!
//! ## Architecture
//!
//! ```text
//! InteractionEngine (gesture state machine)
//!   ├── RegionTemplate (per-variant spanning, centre test, vertex drag)
//!   └── RegionPool (fixed capacity)
//!         └── Region (vertices, lifecycle state, style)
//!               └── dirty_grid (bounding box -> cell indices)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use polyzone_core::{DisplayBounds, PointerEvent, ShapeVariant};
//! use polyzone_designer::InteractionEngine;
//!
//! let bounds = DisplayBounds::new(0, 0, 1080, 720)?;
//! let mut engine = InteractionEngine::with_variant(ShapeVariant::Rect, bounds)?;
//!
//! engine.handle(PointerEvent::down(100, 100));
//! engine.handle(PointerEvent::moved(300, 250));
//! engine.handle(PointerEvent::up(300, 250));
//!
//! let cells = engine.dirty_cells(0, 22, 25, 25);
//! ```

pub mod dirty_grid;
pub mod error;
pub mod interaction;
pub mod pool;
pub mod region;
pub mod template;

pub use dirty_grid::{dirty_cells, sorted_dirty_cells};
pub use error::{DesignerError, DesignerResult};
pub use interaction::{CircleGuides, Grab, GuideLine, InteractionEngine, TouchResponse};
pub use pool::RegionPool;
pub use region::{Region, RegionState};
pub use template::RegionTemplate;
