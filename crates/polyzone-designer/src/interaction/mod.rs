//! Gesture-driven interaction engine.
//!
//! Turns a stream of pointer events into create / drag / move edits on a
//! [`RegionPool`]. The engine is confined to one logical thread: it owns the
//! pool and all gesture state, and performs every edit synchronously inside
//! [`InteractionEngine::handle`]. Hosts that need to reach it from several
//! threads wrap it in [`polyzone_core::ThreadSafe`].

mod types;

pub use types::{CircleGuides, Grab, GuideLine, TouchResponse};

use polyzone_core::{
    chord_length, distance, DisplayBounds, Point, PointerEvent, PointerPhase, ShapeVariant,
};
use polyzone_settings::{Config, GridSettings};

use crate::dirty_grid;
use crate::error::DesignerResult;
use crate::pool::RegionPool;
use crate::region::{Region, RegionState};
use crate::template::RegionTemplate;
use types::Gesture;

/// Interaction state machine over a fixed pool of regions.
#[derive(Debug, Clone)]
pub struct InteractionEngine {
    variant: ShapeVariant,
    template: RegionTemplate,
    vertex_threshold: i32,
    center_threshold: i32,
    circle_offset: Point,
    bounds: DisplayBounds,
    circle_center: Point,
    pool: RegionPool,
    gesture: Gesture,
}

impl InteractionEngine {
    /// Creates an engine for `bounds` using the engine and palette sections
    /// of `config`.
    pub fn new(config: &Config, bounds: DisplayBounds) -> DesignerResult<Self> {
        config.validate()?;
        bounds.validate()?;

        let engine = &config.engine;
        let mut pool = RegionPool::new(engine.pool_capacity, &config.palette);
        pool.seed(engine.shape_variant, &bounds, engine.circle_seed_offset);

        Ok(Self {
            variant: engine.shape_variant,
            template: RegionTemplate::for_variant(engine.shape_variant),
            vertex_threshold: engine.vertex_attraction_threshold,
            center_threshold: engine.center_attraction_threshold,
            circle_offset: engine.circle_seed_offset,
            bounds,
            circle_center: bounds.center(),
            pool,
            gesture: Gesture::default(),
        })
    }

    /// Creates an engine with default settings and the given variant.
    pub fn with_variant(variant: ShapeVariant, bounds: DisplayBounds) -> DesignerResult<Self> {
        let mut config = Config::default();
        config.engine.shape_variant = variant;
        Self::new(&config, bounds)
    }

    pub fn variant(&self) -> ShapeVariant {
        self.variant
    }

    pub fn template(&self) -> RegionTemplate {
        self.template
    }

    pub fn bounds(&self) -> DisplayBounds {
        self.bounds
    }

    pub fn pool(&self) -> &RegionPool {
        &self.pool
    }

    pub fn region(&self, slot: usize) -> Option<&Region> {
        self.pool.get(slot)
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.pool.iter()
    }

    /// Slot the current gesture is editing, if a gesture is in progress.
    pub fn active_slot(&self) -> Option<usize> {
        self.gesture.active
    }

    /// What the current gesture grabbed on gesture-down.
    pub fn grab(&self) -> Option<Grab> {
        self.gesture.grab
    }

    /// Centre shared by every circle in the pool.
    pub fn circle_center(&self) -> Point {
        self.circle_center
    }

    /// Switches to another shape variant and re-seeds the pool.
    pub fn set_variant(&mut self, variant: ShapeVariant) {
        self.variant = variant;
        self.template = RegionTemplate::for_variant(variant);
        self.reseed();
    }

    /// Adopts new display bounds after a host layout pass and re-seeds the
    /// pool around them.
    pub fn layout(&mut self, bounds: DisplayBounds) -> DesignerResult<()> {
        bounds.validate()?;
        self.bounds = bounds;
        self.reseed();
        Ok(())
    }

    fn reseed(&mut self) {
        self.circle_center = self.bounds.center();
        self.pool.seed(self.variant, &self.bounds, self.circle_offset);
        self.gesture = Gesture::default();
    }

    /// Clears every region back to `Uninitialized` and drops gesture state.
    ///
    /// Circles get their defining vertex back, around a re-centred shared
    /// centre, so they stay editable.
    pub fn reset(&mut self) {
        self.pool.reset_all();
        self.circle_center = self.bounds.center();
        if self.template == RegionTemplate::Circle {
            self.pool.seed_circle_vertices(&self.bounds, self.circle_offset);
        }
        self.gesture = Gesture::default();
    }

    /// Dispatches one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> TouchResponse {
        let p = event.position();
        match event.phase {
            PointerPhase::Down => self.touch_down(p),
            PointerPhase::Move => self.touch_move(p),
            PointerPhase::Up | PointerPhase::Cancel => self.touch_up(p),
        }
    }

    /// Resolves a gesture-down: vertex first, then centre, then a new region.
    pub fn touch_down(&mut self, p: Point) -> TouchResponse {
        self.gesture = Gesture::begin(p);

        if let Some((slot, vertex)) = self.attract_vertex(p) {
            self.activate(slot, RegionState::Dragging, Grab::Vertex(vertex));
            tracing::debug!("Grabbed vertex {} of region {} at {}", vertex, slot, p);
            return TouchResponse::Dragging { slot, vertex };
        }

        if let Some((slot, center)) = self.attract_center(p) {
            self.activate(slot, RegionState::Moving, Grab::Center(center));
            tracing::debug!("Grabbed centre {} of region {}", center, slot);
            return TouchResponse::Moving { slot };
        }

        match self.pool.allocate_unused() {
            Some(slot) => {
                if let Some(region) = self.pool.get_mut(slot) {
                    region.set_state(RegionState::Initializing);
                }
                self.gesture.active = Some(slot);
                tracing::debug!("Allocated region {} at {}", slot, p);
                TouchResponse::Created { slot }
            }
            None => {
                tracing::info!(
                    "All {} regions in use, ignoring gesture",
                    self.pool.capacity()
                );
                TouchResponse::PoolExhausted
            }
        }
    }

    /// Applies a gesture-move to the active region.
    pub fn touch_move(&mut self, p: Point) -> TouchResponse {
        let response = match self.gesture.active {
            Some(slot) if self.template == RegionTemplate::Circle => self.move_circle(slot, p),
            Some(slot) => self.move_polygon(slot, p),
            None => TouchResponse::Ignored,
        };
        self.gesture.last = p;
        response
    }

    /// Ends the gesture. Cancel is handled the same way; edits are kept.
    pub fn touch_up(&mut self, p: Point) -> TouchResponse {
        let slot = self.gesture.active;
        if let Some(slot) = slot {
            if self.template.resynthesizes_on_release() {
                let start = self.gesture.start;
                if let Some(region) = self.pool.get_mut(slot) {
                    if region.state() == RegionState::Initializing {
                        let (dx, dy) = delta(start, p);
                        if let Some(vertices) = self.template.synthesize(start, dx, dy) {
                            region.set_vertices(vertices);
                        }
                    }
                }
            }
        }
        self.gesture = Gesture::default();
        TouchResponse::Finished { slot }
    }

    fn activate(&mut self, slot: usize, state: RegionState, grab: Grab) {
        if let Some(region) = self.pool.get_mut(slot) {
            region.set_state(state);
        }
        self.gesture.active = Some(slot);
        self.gesture.grab = Some(grab);
    }

    /// First vertex, in pool order, within the vertex threshold of `p`.
    fn attract_vertex(&self, p: Point) -> Option<(usize, usize)> {
        self.pool.iter().enumerate().find_map(|(slot, region)| {
            region
                .vertices()
                .iter()
                .position(|v| v.attracts(&p, self.vertex_threshold))
                .map(|vertex| (slot, vertex))
        })
    }

    /// First region, in pool order, whose centre `p` grabs.
    fn attract_center(&self, p: Point) -> Option<(usize, Point)> {
        self.pool.iter().enumerate().find_map(|(slot, region)| {
            self.template
                .center_hit(region, p, self.center_threshold, self.circle_center)
                .map(|center| (slot, center))
        })
    }

    fn move_polygon(&mut self, slot: usize, p: Point) -> TouchResponse {
        let start = self.gesture.start;
        let last = self.gesture.last;
        let grab = self.gesture.grab;
        let template = self.template;
        let Some(region) = self.pool.get_mut(slot) else {
            return TouchResponse::Ignored;
        };

        match (region.state(), grab) {
            (RegionState::Initializing, _) => {
                let (dx, dy) = delta(start, p);
                match template.synthesize(start, dx, dy) {
                    Some(vertices) => region.set_vertices(vertices),
                    None => return TouchResponse::Ignored,
                }
            }
            (RegionState::Dragging, Some(Grab::Vertex(index))) => {
                template.drag_vertex(region, index, p);
            }
            (RegionState::Moving, Some(Grab::Center(_))) => {
                let (dx, dy) = delta(last, p);
                region.translate(dx, dy);
            }
            _ => return TouchResponse::Ignored,
        }
        TouchResponse::Updated { slot }
    }

    /// Circle edits apply in every state: a touch near the defining vertex
    /// moves it (radius edit); otherwise a touch near the shared centre drags
    /// the centre along and carries the defining vertex by the same amount.
    fn move_circle(&mut self, slot: usize, p: Point) -> TouchResponse {
        let center = self.circle_center;
        let Some(region) = self.pool.get_mut(slot) else {
            return TouchResponse::Ignored;
        };
        let Some(defining) = region.point(0) else {
            return TouchResponse::Ignored;
        };

        if defining.attracts(&p, self.vertex_threshold) {
            region.set_point(0, p);
        } else if center.attracts(&p, self.center_threshold) {
            let (dx, dy) = delta(center, p);
            region.set_point(0, defining.offset(dx, dy));
            self.circle_center = p;
        } else {
            return TouchResponse::Ignored;
        }
        TouchResponse::Updated { slot }
    }

    /// Radius of the circle in `slot`: distance from the shared centre to its
    /// defining vertex.
    pub fn circle_radius(&self, slot: usize) -> Option<f64> {
        if self.template != RegionTemplate::Circle {
            return None;
        }
        let defining = self.pool.get(slot)?.point(0)?;
        Some(distance(self.circle_center, defining))
    }

    /// Chord guides for the circle in `slot`, placed at a third of the radius
    /// from the centre.
    pub fn circle_guides(&self, slot: usize) -> Option<CircleGuides> {
        let radius = self.circle_radius(slot)?;
        let offset = radius / 3.0;
        let half = (chord_length(radius, offset) / 2.0) as i32;
        let d = offset as i32;
        let c = self.circle_center;

        let vertical = |x: i32| GuideLine {
            from: Point::new(x, c.y.saturating_sub(half)),
            to: Point::new(x, c.y.saturating_add(half)),
        };
        let horizontal = |y: i32| GuideLine {
            from: Point::new(c.x.saturating_sub(half), y),
            to: Point::new(c.x.saturating_add(half), y),
        };

        Some(CircleGuides {
            left: vertical(c.x.saturating_sub(d)),
            right: vertical(c.x.saturating_add(d)),
            top: horizontal(c.y.saturating_sub(d)),
            bottom: horizontal(c.y.saturating_add(d)),
        })
    }

    /// Overlay-grid cells touched by the region in `slot`, sorted ascending.
    ///
    /// Returns `None` for an out-of-range slot or a region with no vertices.
    pub fn dirty_cells(
        &self,
        slot: usize,
        columns: i32,
        cell_width: i32,
        cell_height: i32,
    ) -> Option<Vec<i32>> {
        let region = self.pool.get(slot)?;
        let cells = dirty_grid::sorted_dirty_cells(
            region.bounding_box(),
            columns,
            cell_width,
            cell_height,
        );
        tracing::trace!("Dirty cells for region {}: {:?}", slot, cells);
        cells
    }

    /// [`Self::dirty_cells`] with the grid taken from settings.
    pub fn dirty_cells_in(&self, slot: usize, grid: &GridSettings) -> Option<Vec<i32>> {
        self.dirty_cells(slot, grid.columns, grid.cell_width, grid.cell_height)
    }
}

/// Per-axis displacement from `from` to `to`, wrapping at the `i32` range.
fn delta(from: Point, to: Point) -> (i32, i32) {
    (to.x.wrapping_sub(from.x), to.y.wrapping_sub(from.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DisplayBounds {
        DisplayBounds::new(0, 0, 1000, 800).unwrap()
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = InteractionEngine::with_variant(ShapeVariant::Rect, bounds()).unwrap();
        assert_eq!(engine.active_slot(), None);
        assert_eq!(engine.grab(), None);
        assert_eq!(engine.pool().capacity(), 4);
        assert_eq!(engine.circle_center(), Point::new(500, 400));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let mut config = Config::default();
        config.engine.pool_capacity = 0;
        assert!(InteractionEngine::new(&config, bounds()).is_err());
    }

    #[test]
    fn test_gesture_state_cleared_on_release() {
        let mut engine = InteractionEngine::with_variant(ShapeVariant::Rect, bounds()).unwrap();
        engine.touch_down(Point::new(10, 10));
        assert_eq!(engine.active_slot(), Some(0));
        engine.touch_up(Point::new(10, 10));
        assert_eq!(engine.active_slot(), None);
        assert_eq!(engine.grab(), None);
    }

    #[test]
    fn test_move_without_gesture_is_ignored() {
        let mut engine = InteractionEngine::with_variant(ShapeVariant::Rect, bounds()).unwrap();
        assert_eq!(engine.touch_move(Point::new(5, 5)), TouchResponse::Ignored);
    }

    #[test]
    fn test_circle_queries_only_in_circle_mode() {
        let engine = InteractionEngine::with_variant(ShapeVariant::Rect, bounds()).unwrap();
        assert_eq!(engine.circle_radius(0), None);
        assert_eq!(engine.circle_guides(0), None);
    }

    #[test]
    fn test_gestures_at_coordinate_extremes() {
        let mut engine = InteractionEngine::with_variant(ShapeVariant::Rect, bounds()).unwrap();
        engine.touch_down(Point::new(i32::MIN, i32::MIN));
        assert_eq!(
            engine.touch_move(Point::new(i32::MAX, i32::MAX)),
            TouchResponse::Updated { slot: 0 }
        );
        engine.touch_up(Point::new(i32::MAX, i32::MAX));

        // the span wraps like the host's integer arithmetic
        let region = engine.region(0).unwrap();
        assert_eq!(region.point(0), Some(Point::new(i32::MIN, i32::MIN)));
        assert_eq!(region.point(2), Some(Point::new(i32::MAX, i32::MAX)));
    }

    #[test]
    fn test_dirty_cells_out_of_range_slot() {
        let engine = InteractionEngine::with_variant(ShapeVariant::Rect, bounds()).unwrap();
        assert_eq!(engine.dirty_cells(4, 22, 25, 25), None);
        assert_eq!(engine.dirty_cells(0, 22, 25, 25), None);
    }
}
