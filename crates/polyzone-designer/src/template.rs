//! Per-variant behaviour tables.
//!
//! Each shape variant differs in three places: how a fresh region is spanned
//! from a drag, how a touch is tested against a region's centre, and how a
//! grabbed vertex moves. The table is chosen once, when the engine is
//! configured, so the gesture handlers never inspect the variant again.

use polyzone_core::{Point, ShapeVariant};

use crate::region::Region;

/// Geometry rules for one shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionTemplate {
    /// Axis-aligned rectangle whose edges stay axis-aligned while resizing.
    Rect,
    /// Eight-point outline with midpoints on every side; vertices move freely.
    Octagon,
    /// Single defining vertex around the engine's shared centre.
    Circle,
}

impl RegionTemplate {
    /// Rules for `variant`. The reserved variants use the rectangle rules.
    pub fn for_variant(variant: ShapeVariant) -> Self {
        match variant {
            ShapeVariant::Rect => Self::Rect,
            ShapeVariant::Octagon => Self::Octagon,
            ShapeVariant::Circle => Self::Circle,
            ShapeVariant::Oval | ShapeVariant::Hexagon => {
                tracing::warn!("{} has no geometry of its own, using rect rules", variant);
                Self::Rect
            }
        }
    }

    /// Vertex count of a fully built region.
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Rect => 4,
            Self::Octagon => 8,
            Self::Circle => 1,
        }
    }

    /// Full vertex set for a region spanned from `start` by `(dx, dy)`.
    ///
    /// Circles are not spanned; their defining vertex is seeded by the pool.
    pub fn synthesize(&self, start: Point, dx: i32, dy: i32) -> Option<Vec<Point>> {
        match self {
            Self::Rect => Some(vec![
                start,
                start.offset(0, dy),
                start.offset(dx, dy),
                start.offset(dx, 0),
            ]),
            Self::Octagon => Some(vec![
                start,
                start.offset(0, dy / 2),
                start.offset(0, dy),
                start.offset(dx / 2, dy),
                start.offset(dx, dy),
                start.offset(dx, dy / 2),
                start.offset(dx, 0),
                start.offset(dx / 2, 0),
            ]),
            Self::Circle => None,
        }
    }

    /// `true` when releasing the pointer must span the region one last time
    /// from the total gesture delta.
    pub fn resynthesizes_on_release(&self) -> bool {
        matches!(self, Self::Octagon)
    }

    /// The centre point a touch grabs on `region`, if any.
    ///
    /// * Rect: the touch must lie strictly within half the horizontal and
    ///   vertical span between vertex 0 and its opposite vertex, measured from
    ///   the centroid.
    /// * Octagon: Chebyshev distance to the centroid below `threshold`.
    /// * Circle: Chebyshev distance to the shared centre below `threshold`,
    ///   for regions that have been handed out.
    pub fn center_hit(
        &self,
        region: &Region,
        touch: Point,
        threshold: i32,
        circle_center: Point,
    ) -> Option<Point> {
        match self {
            Self::Rect => {
                let center = region.centroid()?;
                let first = region.point(0)?;
                let far = region.point(region.opposite(0)?)?;
                let half_w = first.x.abs_diff(far.x) / 2;
                let half_h = first.y.abs_diff(far.y) / 2;
                (half_w > touch.x.abs_diff(center.x) && half_h > touch.y.abs_diff(center.y))
                    .then_some(center)
            }
            Self::Octagon => {
                let center = region.centroid()?;
                center.attracts(&touch, threshold).then_some(center)
            }
            Self::Circle => (region.is_initialized() && circle_center.attracts(&touch, threshold))
                .then_some(circle_center),
        }
    }

    /// Moves the vertex at `index` to `touch`.
    ///
    /// For rectangles the two neighbours follow so adjacent edges stay
    /// axis-aligned: the neighbour sharing the grabbed vertex's x takes the
    /// x delta, the other one takes the y delta. The opposite corner never
    /// moves.
    pub fn drag_vertex(&self, region: &mut Region, index: usize, touch: Point) {
        let Some(grabbed) = region.point(index) else {
            return;
        };

        if *self == Self::Rect {
            let dx = touch.x.wrapping_sub(grabbed.x);
            let dy = touch.y.wrapping_sub(grabbed.y);
            let prev = region.previous(index);
            let next = region.next(index);

            let prev_shares_x = region.point(prev).is_some_and(|p| p.x == grabbed.x);
            if prev_shares_x {
                region.translate_vertex(prev, dx, 0);
                region.translate_vertex(next, 0, dy);
            } else {
                region.translate_vertex(prev, 0, dy);
                region.translate_vertex(next, dx, 0);
            }
        }

        region.set_point(index, touch);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyzone_core::DEFAULT_PALETTE;

    fn region(points: Vec<Point>) -> Region {
        let mut r = Region::new(DEFAULT_PALETTE[0]);
        r.set_vertices(points);
        r
    }

    #[test]
    fn test_reserved_variants_use_rect_rules() {
        assert_eq!(
            RegionTemplate::for_variant(ShapeVariant::Oval),
            RegionTemplate::Rect
        );
        assert_eq!(
            RegionTemplate::for_variant(ShapeVariant::Hexagon),
            RegionTemplate::Rect
        );
        assert_eq!(
            RegionTemplate::for_variant(ShapeVariant::Octagon),
            RegionTemplate::Octagon
        );
    }

    #[test]
    fn test_rect_synthesis() {
        let pts = RegionTemplate::Rect
            .synthesize(Point::new(10, 20), 30, -40)
            .unwrap();
        assert_eq!(
            pts,
            vec![
                Point::new(10, 20),
                Point::new(10, -20),
                Point::new(40, -20),
                Point::new(40, 20),
            ]
        );
    }

    #[test]
    fn test_octagon_synthesis_halves_truncate() {
        let pts = RegionTemplate::Octagon
            .synthesize(Point::new(0, 0), 11, -7)
            .unwrap();
        assert_eq!(pts.len(), 8);
        assert_eq!(pts[1], Point::new(0, -3));
        assert_eq!(pts[3], Point::new(5, -7));
        assert_eq!(pts[4], Point::new(11, -7));
        assert_eq!(pts[7], Point::new(5, 0));
    }

    #[test]
    fn test_circle_does_not_synthesize() {
        assert_eq!(RegionTemplate::Circle.synthesize(Point::new(0, 0), 5, 5), None);
    }

    #[test]
    fn test_rect_center_hit_uses_half_extent() {
        let r = region(
            RegionTemplate::Rect
                .synthesize(Point::new(100, 100), 200, 100)
                .unwrap(),
        );
        let center = Point::new(200, 150);
        // half extent is 100 x 50, far beyond the flat threshold
        assert_eq!(
            RegionTemplate::Rect.center_hit(&r, Point::new(290, 190), 10, Point::default()),
            Some(center)
        );
        assert_eq!(
            RegionTemplate::Rect.center_hit(&r, Point::new(200, 200), 10, Point::default()),
            None
        );
    }

    #[test]
    fn test_octagon_center_hit_uses_threshold() {
        let r = region(
            RegionTemplate::Octagon
                .synthesize(Point::new(0, 0), 400, 400)
                .unwrap(),
        );
        let c = r.centroid().unwrap();
        assert!(RegionTemplate::Octagon
            .center_hit(&r, c.offset(99, -99), 100, Point::default())
            .is_some());
        assert!(RegionTemplate::Octagon
            .center_hit(&r, c.offset(100, 0), 100, Point::default())
            .is_none());
    }

    #[test]
    fn test_empty_region_has_no_center() {
        let r = region(vec![]);
        assert!(RegionTemplate::Rect
            .center_hit(&r, Point::new(0, 0), 100, Point::default())
            .is_none());
        assert!(RegionTemplate::Octagon
            .center_hit(&r, Point::new(0, 0), 100, Point::default())
            .is_none());
    }

    #[test]
    fn test_rect_drag_keeps_right_angles() {
        let mut r = region(
            RegionTemplate::Rect
                .synthesize(Point::new(100, 100), 100, 100)
                .unwrap(),
        );
        // grab (200, 200); prev (100, 200) and next (200, 100)
        RegionTemplate::Rect.drag_vertex(&mut r, 2, Point::new(230, 260));
        assert_eq!(
            r.vertices(),
            &[
                Point::new(100, 100),
                Point::new(100, 260),
                Point::new(230, 260),
                Point::new(230, 100),
            ]
        );
    }

    #[test]
    fn test_rect_drag_first_corner() {
        let mut r = region(
            RegionTemplate::Rect
                .synthesize(Point::new(100, 100), 100, 100)
                .unwrap(),
        );
        // grab (100, 100); prev is (200, 100), next is (100, 200)
        RegionTemplate::Rect.drag_vertex(&mut r, 0, Point::new(90, 80));
        assert_eq!(
            r.vertices(),
            &[
                Point::new(90, 80),
                Point::new(90, 200),
                Point::new(200, 200),
                Point::new(200, 80),
            ]
        );
    }

    #[test]
    fn test_octagon_drag_moves_only_grabbed_vertex() {
        let original = RegionTemplate::Octagon
            .synthesize(Point::new(0, 0), 100, 100)
            .unwrap();
        let mut r = region(original.clone());
        RegionTemplate::Octagon.drag_vertex(&mut r, 3, Point::new(70, 130));
        for (i, v) in r.vertices().iter().enumerate() {
            if i == 3 {
                assert_eq!(*v, Point::new(70, 130));
            } else {
                assert_eq!(*v, original[i]);
            }
        }
    }
}
