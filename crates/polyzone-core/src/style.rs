//! Region styling identifiers.
//!
//! The engine never interprets styles; it only hands each pool slot one
//! fill/corner pair at seed time so the renderer can tell regions apart.

use serde::{Deserialize, Serialize};

/// Opaque style identifier. The defaults are ARGB colours.
pub type StyleId = u32;

/// Fill and corner-handle style of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionStyle {
    pub fill: StyleId,
    pub corner: StyleId,
}

impl RegionStyle {
    pub const fn new(fill: StyleId, corner: StyleId) -> Self {
        Self { fill, corner }
    }
}

/// Default palette: translucent fills with opaque corner handles in
/// red, green, blue and amber.
pub const DEFAULT_PALETTE: [RegionStyle; 4] = [
    RegionStyle::new(0x7FD8_2525, 0xFFD8_2525),
    RegionStyle::new(0x7F40_B23A, 0xFF40_B23A),
    RegionStyle::new(0x7F04_B0E8, 0xFF04_B0E8),
    RegionStyle::new(0x7FC4_A602, 0xFFC4_A602),
];
