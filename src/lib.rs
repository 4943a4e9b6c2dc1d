//! # Polyzone
//!
//! Touch-driven region editor engine. A host displays an image, forwards
//! pointer events to the engine, and draws the bounded set of regions the
//! user creates, resizes and moves on top of it. After each edit the engine
//! reports which overlay-grid cells a region touches so the host can limit
//! its redraw.
//!
//! ## Architecture
//!
//! Polyzone is organized as a workspace with multiple crates:
//!
//! 1. **polyzone-core** - Integer geometry, shape variants, styles, pointer events
//! 2. **polyzone-settings** - Engine, grid and palette configuration
//! 3. **polyzone-designer** - Region pool, gesture state machine, dirty-grid rasterizer
//! 4. **polyzone** - Gesture replay and the command line front end
//!
//! ## Features
//!
//! - **Shape Variants**: rectangles, octagons, and circles around a shared centre
//! - **Gestures**: span a new region, drag a vertex, move a region by its centre
//! - **Dirty Grid**: per-region cell lists for partial redraw
//! - **Replay**: run a recorded gesture script and dump the resulting regions

pub mod cli;
pub mod replay;

pub use polyzone_core::{
    BoundingBox, DisplayBounds, Error, Point, PointerEvent, PointerPhase, RegionStyle, Result,
    ShapeVariant, DEFAULT_PALETTE,
};

pub use polyzone_designer::{
    dirty_cells, sorted_dirty_cells, CircleGuides, DesignerError, DesignerResult, Grab,
    InteractionEngine, Region, RegionPool, RegionState, RegionTemplate, TouchResponse,
};

pub use polyzone_settings::{Config, ConfigError, EngineSettings, GridSettings, SettingsError};

pub use replay::{replay, GestureScript, RegionReport, ReplayReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("POLYZONE_BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support, INFO by default
/// - Pretty console output, or one JSON object per line when `json` is set
///
/// Logs go to stderr so command output on stdout stays machine readable.
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_line_number(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
