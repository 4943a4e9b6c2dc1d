//! Scripted gesture replay.
//!
//! A gesture script names the display bounds, optionally a shape variant,
//! and a list of pointer events. Replaying it drives a fresh
//! [`InteractionEngine`] and reports every region with its dirty cells.

use std::path::Path;

use anyhow::Context;
use polyzone_core::{DisplayBounds, Point, PointerEvent, RegionStyle, ShapeVariant};
use polyzone_designer::{CircleGuides, InteractionEngine, RegionState, TouchResponse};
use polyzone_settings::{Config, GridSettings};
use serde::{Deserialize, Serialize};

/// Recorded input for one replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureScript {
    pub bounds: DisplayBounds,
    /// Overrides the configured shape variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ShapeVariant>,
    #[serde(default)]
    pub events: Vec<PointerEvent>,
}

impl GestureScript {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read gesture script {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse gesture script {}", path.display()))
    }
}

/// One pool slot after replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionReport {
    pub slot: usize,
    pub state: RegionState,
    pub style: RegionStyle,
    pub vertices: Vec<Point>,
    pub dirty_cells: Option<Vec<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub variant: ShapeVariant,
    pub responses: Vec<TouchResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_center: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_radius: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circle_guides: Option<CircleGuides>,
    pub regions: Vec<RegionReport>,
}

/// Feeds every event of `script` to a new engine built from `config`.
pub fn replay(
    script: &GestureScript,
    config: &Config,
    grid: &GridSettings,
) -> anyhow::Result<ReplayReport> {
    let mut config = config.clone();
    if let Some(variant) = script.variant {
        config.engine.shape_variant = variant;
    }

    let mut engine = InteractionEngine::new(&config, script.bounds)
        .context("Failed to set up interaction engine")?;

    let responses: Vec<TouchResponse> = script
        .events
        .iter()
        .map(|event| {
            let response = engine.handle(*event);
            tracing::debug!("{} -> {:?}", event, response);
            response
        })
        .collect();

    let regions = engine
        .regions()
        .enumerate()
        .map(|(slot, region)| RegionReport {
            slot,
            state: region.state(),
            style: region.style(),
            vertices: region.vertices().to_vec(),
            dirty_cells: engine.dirty_cells_in(slot, grid),
        })
        .collect();

    // circle details describe the first circle handed out
    let circle_slot = engine
        .regions()
        .position(|r| r.is_initialized())
        .unwrap_or(0);
    let is_circle = engine.variant() == ShapeVariant::Circle;

    tracing::info!(
        "Replayed {} events, {} regions in use",
        responses.len(),
        engine.pool().in_use()
    );

    Ok(ReplayReport {
        variant: engine.variant(),
        responses,
        circle_center: is_circle.then(|| engine.circle_center()),
        circle_radius: engine.circle_radius(circle_slot),
        circle_guides: engine.circle_guides(circle_slot),
        regions,
    })
}
