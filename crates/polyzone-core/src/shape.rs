//! Shape variant selection
//!
//! Five variants can be selected by the host. `Oval` and `Hexagon` are
//! reserved: they are accepted everywhere a variant is, but carry no geometry
//! of their own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Region shape selected for the whole pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeVariant {
    /// Axis-aligned rectangle, 4 vertices
    #[default]
    Rect,
    /// Reserved
    Oval,
    /// Circle around a shared centre, 1 defining vertex
    Circle,
    /// Reserved
    Hexagon,
    /// Octagon with side midpoints, 8 vertices
    Octagon,
}

impl ShapeVariant {
    pub const ALL: [ShapeVariant; 5] = [
        Self::Rect,
        Self::Oval,
        Self::Circle,
        Self::Hexagon,
        Self::Octagon,
    ];

    /// Numeric code as stored in host layout attributes.
    pub fn code(&self) -> i32 {
        match self {
            Self::Rect => 0,
            Self::Oval => 1,
            Self::Circle => 2,
            Self::Hexagon => 3,
            Self::Octagon => 4,
        }
    }

    /// Maps a numeric code to a variant, falling back to `Rect` for unknown
    /// codes.
    pub fn from_code(code: i32) -> Self {
        Self::try_from(code).unwrap_or_else(|_| {
            tracing::warn!("Unknown shape code {}, defaulting to Rect", code);
            Self::Rect
        })
    }

    /// `true` for the variants that have no geometry of their own.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Self::Oval | Self::Hexagon)
    }
}

impl TryFrom<i32> for ShapeVariant {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == code)
            .ok_or(Error::UnknownShapeCode { code })
    }
}

impl fmt::Display for ShapeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect => write!(f, "rect"),
            Self::Oval => write!(f, "oval"),
            Self::Circle => write!(f, "circle"),
            Self::Hexagon => write!(f, "hexagon"),
            Self::Octagon => write!(f, "octagon"),
        }
    }
}

impl FromStr for ShapeVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rect" | "rectangle" => Ok(Self::Rect),
            "oval" => Ok(Self::Oval),
            "circle" => Ok(Self::Circle),
            "hexagon" => Ok(Self::Hexagon),
            "octagon" => Ok(Self::Octagon),
            _ => Err(Error::UnknownShapeName {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_mapping() {
        for variant in ShapeVariant::ALL {
            assert_eq!(ShapeVariant::try_from(variant.code()), Ok(variant));
        }
        assert_eq!(ShapeVariant::from_code(2), ShapeVariant::Circle);
        assert_eq!(ShapeVariant::from_code(4), ShapeVariant::Octagon);
    }

    #[test]
    fn test_unknown_code_falls_back_to_rect() {
        assert_eq!(ShapeVariant::from_code(7), ShapeVariant::Rect);
        assert_eq!(ShapeVariant::from_code(-1), ShapeVariant::Rect);
        assert_eq!(
            ShapeVariant::try_from(7),
            Err(Error::UnknownShapeCode { code: 7 })
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Octagon".parse::<ShapeVariant>(), Ok(ShapeVariant::Octagon));
        assert_eq!("rectangle".parse::<ShapeVariant>(), Ok(ShapeVariant::Rect));
        assert!("star".parse::<ShapeVariant>().is_err());
    }

    #[test]
    fn test_reserved() {
        assert!(ShapeVariant::Oval.is_reserved());
        assert!(ShapeVariant::Hexagon.is_reserved());
        assert!(!ShapeVariant::Circle.is_reserved());
    }

    #[test]
    fn test_default_is_rect() {
        assert_eq!(ShapeVariant::default(), ShapeVariant::Rect);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ShapeVariant::Octagon).unwrap();
        assert_eq!(json, "\"octagon\"");
        let v: ShapeVariant = serde_json::from_str("\"circle\"").unwrap();
        assert_eq!(v, ShapeVariant::Circle);
    }
}
