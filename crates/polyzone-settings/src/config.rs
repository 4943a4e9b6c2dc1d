//! Configuration for the polyzone interaction engine
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats stored in a platform-specific directory.
//!
//! Configuration is organized into logical sections:
//! - Engine settings (shape variant, pool capacity, attraction thresholds)
//! - Grid settings (default dirty-cell grid geometry)
//! - Palette (one fill/corner style pair per pool slot)

use polyzone_core::{Point, RegionStyle, ShapeVariant, DEFAULT_PALETTE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const APP_DIR: &str = "polyzone";
const CONFIG_FILE: &str = "config.toml";

/// Interaction engine settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Shape drawn by every region in the pool
    pub shape_variant: ShapeVariant,
    /// Number of regions the user may create
    pub pool_capacity: usize,
    /// Chebyshev distance at which a touch grabs a vertex
    pub vertex_attraction_threshold: i32,
    /// Chebyshev distance at which a touch grabs a region centre
    pub center_attraction_threshold: i32,
    /// Offset of each circle's defining vertex from the display centre
    pub circle_seed_offset: Point,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            shape_variant: ShapeVariant::Rect,
            pool_capacity: 4,
            vertex_attraction_threshold: 50,
            center_attraction_threshold: 100,
            circle_seed_offset: Point::new(150, 0),
        }
    }
}

/// Overlay grid used for dirty-cell queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Number of grid columns
    pub columns: i32,
    /// Cell width in display units
    pub cell_width: i32,
    /// Cell height in display units
    pub cell_height: i32,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            columns: 22,
            cell_width: 25,
            cell_height: 25,
        }
    }
}

/// Complete polyzone configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Engine settings
    pub engine: EngineSettings,
    /// Dirty-cell grid defaults
    pub grid: GridSettings,
    /// Styles assigned to pool slots by position
    pub palette: Vec<RegionStyle>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: EngineSettings::default(),
            grid: GridSettings::default(),
            palette: DEFAULT_PALETTE.to_vec(),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/polyzone/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no platform config directory".to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads the config at the default location, or returns defaults when
    /// no file exists there yet.
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load(&path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => self.to_toml_string()?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("{}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Renders the config as TOML.
    pub fn to_toml_string(&self) -> SettingsResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.engine.pool_capacity == 0 {
            return Err(out_of_range("engine.pool_capacity", self.engine.pool_capacity));
        }

        if self.engine.vertex_attraction_threshold <= 0 {
            return Err(out_of_range(
                "engine.vertex_attraction_threshold",
                self.engine.vertex_attraction_threshold,
            ));
        }

        if self.engine.center_attraction_threshold <= 0 {
            return Err(out_of_range(
                "engine.center_attraction_threshold",
                self.engine.center_attraction_threshold,
            ));
        }

        if self.palette.len() < self.engine.pool_capacity {
            return Err(ConfigError::PaletteTooSmall {
                palette: self.palette.len(),
                capacity: self.engine.pool_capacity,
            });
        }

        if self.grid.columns <= 0 {
            return Err(out_of_range("grid.columns", self.grid.columns));
        }

        if self.grid.cell_width <= 0 {
            return Err(out_of_range("grid.cell_width", self.grid.cell_width));
        }

        if self.grid.cell_height <= 0 {
            return Err(out_of_range("grid.cell_height", self.grid.cell_height));
        }

        Ok(())
    }
}

fn out_of_range(key: &str, value: impl ToString) -> ConfigError {
    ConfigError::ValueOutOfRange {
        key: key.to_string(),
        value: value.to_string(),
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
