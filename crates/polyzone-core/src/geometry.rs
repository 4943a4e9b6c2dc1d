//! Integer geometry primitives and the pure geometry utilities used by the
//! interaction engine.
//!
//! All coordinates are integers in display space (x grows right, y grows
//! down). The only floating point results are distances and chord lengths.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A 2D point with integer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`, wrapping at the `i32` range.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(&self, other: &Point) -> f64 {
        distance(*self, *other)
    }

    /// Chebyshev (max-axis) distance to `other`.
    ///
    /// This is the metric every attraction threshold is measured in.
    /// Saturates at `i32::MAX`.
    pub fn chebyshev_to(&self, other: &Point) -> i32 {
        let d = self.x.abs_diff(other.x).max(self.y.abs_diff(other.y));
        i32::try_from(d).unwrap_or(i32::MAX)
    }

    /// `true` when `other` lies strictly inside the square of half-side
    /// `threshold` centred on this point.
    pub fn attracts(&self, other: &Point, threshold: i32) -> bool {
        threshold > self.chebyshev_to(other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Axis-aligned bounding box, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> i32 {
        self.max_x.wrapping_sub(self.min_x)
    }

    pub fn height(&self) -> i32 {
        self.max_y.wrapping_sub(self.min_y)
    }
}

/// The rectangle the displayed image occupies inside the host view.
///
/// Used to seed default region positions and the shared circle centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl DisplayBounds {
    /// Creates display bounds, rejecting a negative width or height.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self> {
        let bounds = Self {
            left,
            top,
            right,
            bottom,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks that the bounds have a non-negative extent.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.right < self.left {
            "right < left"
        } else if self.bottom < self.top {
            "bottom < top"
        } else {
            return Ok(());
        };
        Err(Error::InvalidBounds {
            left: self.left,
            top: self.top,
            right: self.right,
            bottom: self.bottom,
            reason: reason.to_string(),
        })
    }

    pub fn width(&self) -> i32 {
        self.right.wrapping_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.wrapping_sub(self.top)
    }

    /// Centre of the bounds, truncated toward zero.
    pub fn center(&self) -> Point {
        let mid = |a: i32, b: i32| ((i64::from(a) + i64::from(b)) / 2) as i32;
        Point::new(mid(self.left, self.right), mid(self.top, self.bottom))
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    let side1 = f64::from(b.x) - f64::from(a.x);
    let side2 = f64::from(b.y) - f64::from(a.y);
    (side1 * side1 + side2 * side2).sqrt()
}

/// Length of the chord at `perpendicular_distance` from the centre of a
/// circle of the given radius: `2 * sqrt(r^2 - d^2)`.
///
/// The input is not validated. A distance greater than the radius yields
/// `NaN`, which callers discard or clamp before drawing.
pub fn chord_length(radius: f64, perpendicular_distance: f64) -> f64 {
    2.0 * (radius * radius - perpendicular_distance * perpendicular_distance).sqrt()
}

/// Arithmetic mean of the points, truncated toward zero.
///
/// Returns `None` for an empty slice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let (sum_x, sum_y) = points.iter().fold((0i64, 0i64), |(sx, sy), p| {
        (sx + i64::from(p.x), sy + i64::from(p.y))
    });
    let n = points.len() as i64;
    Some(Point::new((sum_x / n) as i32, (sum_y / n) as i32))
}

/// Axis-aligned bounding box of the points, seeded with the first point.
///
/// Returns `None` for an empty slice.
pub fn bounding_box(points: &[Point]) -> Option<BoundingBox> {
    let first = points.first()?;
    let bbox = points.iter().fold(
        BoundingBox::new(first.x, first.y, first.x, first.y),
        |mut b, p| {
            b.min_x = b.min_x.min(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_x = b.max_x.max(p.x);
            b.max_y = b.max_y.max(p.y);
            b
        },
    );
    tracing::trace!(
        "bounding box {} {} {} {}",
        bbox.min_x,
        bbox.min_y,
        bbox.max_x,
        bbox.max_y
    );
    Some(bbox)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point> {
        vec![
            Point::new(0, 0),
            Point::new(0, 10),
            Point::new(10, 10),
            Point::new(10, 0),
        ]
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(Point::new(1, 1).distance_to(&Point::new(1, 1)), 0.0);
    }

    #[test]
    fn test_chord_length() {
        assert!((chord_length(5.0, 3.0) - 8.0).abs() < 1e-9);
        assert!((chord_length(5.0, 0.0) - 10.0).abs() < 1e-9);
        assert_eq!(chord_length(5.0, 5.0), 0.0);
    }

    #[test]
    fn test_chord_length_past_radius_is_nan() {
        assert!(chord_length(3.0, 4.0).is_nan());
    }

    #[test]
    fn test_centroid_of_square() {
        assert_eq!(centroid(&square()), Some(Point::new(5, 5)));
    }

    #[test]
    fn test_centroid_truncates_toward_zero() {
        let pts = [Point::new(0, 0), Point::new(1, -1), Point::new(1, -2)];
        // 2/3 -> 0, -3/3 -> -1
        assert_eq!(centroid(&pts), Some(Point::new(0, -1)));

        let pts = [Point::new(-1, 0), Point::new(-2, 0)];
        // -3/2 truncates to -1, not -2
        assert_eq!(centroid(&pts), Some(Point::new(-1, 0)));
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn test_bounding_box_of_square() {
        assert_eq!(
            bounding_box(&square()),
            Some(BoundingBox::new(0, 0, 10, 10))
        );
    }

    #[test]
    fn test_bounding_box_negative_coordinates() {
        let pts = [Point::new(-20, -5), Point::new(-10, -30)];
        assert_eq!(
            bounding_box(&pts),
            Some(BoundingBox::new(-20, -30, -10, -5))
        );
    }

    #[test]
    fn test_bounding_box_empty() {
        assert_eq!(bounding_box(&[]), None);
    }

    #[test]
    fn test_chebyshev_and_attraction() {
        let p = Point::new(100, 100);
        assert_eq!(p.chebyshev_to(&Point::new(130, 60)), 40);
        assert!(p.attracts(&Point::new(149, 51), 50));
        assert!(!p.attracts(&Point::new(150, 100), 50));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let far_left = Point::new(i32::MIN, 0);
        let far_right = Point::new(i32::MAX, 0);
        assert_eq!(far_left.chebyshev_to(&far_right), i32::MAX);
        assert!(!far_left.attracts(&far_right, 50));

        assert_eq!(far_right.offset(1, 0), Point::new(i32::MIN, 0));
        assert_eq!(distance(far_left, far_right), f64::from(u32::MAX));

        let bounds = DisplayBounds::new(i32::MAX - 10, 0, i32::MAX, 0).unwrap();
        assert_eq!(bounds.center(), Point::new(i32::MAX - 5, 0));
    }

    #[test]
    fn test_display_bounds() {
        let bounds = DisplayBounds::new(0, 0, 1080, 720).unwrap();
        assert_eq!(bounds.center(), Point::new(540, 360));
        assert_eq!(bounds.width(), 1080);
        assert_eq!(bounds.height(), 720);

        assert!(matches!(
            DisplayBounds::new(10, 0, 0, 10),
            Err(Error::InvalidBounds { .. })
        ));
        assert!(DisplayBounds::new(0, 10, 10, 0).is_err());
    }
}
