use polyzone_core::{DisplayBounds, Point, RegionStyle, ShapeVariant, DEFAULT_PALETTE};

use crate::region::{Region, RegionState};

/// Fixed-capacity collection of regions.
///
/// Slots are addressed by position; each slot keeps the palette style it was
/// seeded with for as long as the pool lives. The pool does not enforce the
/// single-active-gesture rule; the interaction engine does.
#[derive(Debug, Clone)]
pub struct RegionPool {
    regions: Vec<Region>,
    palette: Vec<RegionStyle>,
}

impl RegionPool {
    /// Creates a pool of `capacity` empty regions, styled by position from
    /// `palette`.
    ///
    /// The palette is cycled if it is shorter than the capacity, and the
    /// default palette is used when it is empty.
    pub fn new(capacity: usize, palette: &[RegionStyle]) -> Self {
        let palette = if palette.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            palette.to_vec()
        };
        let regions = (0..capacity)
            .map(|i| Region::new(palette[i % palette.len()]))
            .collect();
        Self { regions, palette }
    }

    /// Re-creates every slot for `variant`.
    ///
    /// For circles each region also receives its defining vertex at
    /// `circle_offset` from the centre of `bounds`.
    pub fn seed(&mut self, variant: ShapeVariant, bounds: &DisplayBounds, circle_offset: Point) {
        let capacity = self.regions.len();
        *self = Self::new(capacity, &self.palette);
        if variant == ShapeVariant::Circle {
            self.seed_circle_vertices(bounds, circle_offset);
        }
        tracing::info!("Seeded {} {} regions", capacity, variant);
    }

    /// Gives every empty region a circle-defining vertex.
    pub fn seed_circle_vertices(&mut self, bounds: &DisplayBounds, circle_offset: Point) {
        let center = bounds.center();
        let vertex = center.offset(circle_offset.x, circle_offset.y);
        for region in self.regions.iter_mut().filter(|r| r.is_empty()) {
            region.add_point(vertex);
        }
    }

    /// Slot of the first region still `Uninitialized`, or `None` when the
    /// pool is exhausted.
    pub fn allocate_unused(&self) -> Option<usize> {
        self.regions
            .iter()
            .position(|r| r.state() == RegionState::Uninitialized)
    }

    /// Clears every region's vertices and returns it to `Uninitialized`.
    pub fn reset_all(&mut self) {
        for region in &mut self.regions {
            region.clear();
        }
        tracing::info!("Reset {} regions", self.regions.len());
    }

    pub fn capacity(&self) -> usize {
        self.regions.len()
    }

    pub fn get(&self, slot: usize) -> Option<&Region> {
        self.regions.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Region> {
        self.regions.get_mut(slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Region> {
        self.regions.iter_mut()
    }

    /// Number of slots that have been handed out.
    pub fn in_use(&self) -> usize {
        self.regions.iter().filter(|r| r.is_initialized()).count()
    }
}
