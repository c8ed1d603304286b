//! # Seatplan Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SEATPLAN_MAX_GRID=30                                               │
//! │     SEATPLAN_DATA_DIR=/srv/seatplan                                    │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/seatplan/seatplan.toml (Linux)                           │
//! │     ~/Library/Application Support/org.seatplan.seatplan/... (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     20x20 maximum grid, platform data dir, "seatingChart" key          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # seatplan.toml
//! [grid]
//! max_dimension = 20
//!
//! [storage]
//! data_dir = "/home/me/.local/share/seatplan"
//! key = "seatingChart"
//!
//! [export]
//! file_prefix = "seating-chart"
//! directory = "."
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use seatplan_core::{GridLimits, DEFAULT_COLS, DEFAULT_ROWS, MAX_GRID_DIMENSION};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Grid Settings
// =============================================================================

/// Ceiling for `grid.max_dimension`; a 100x100 chart is already 10,000 seats.
pub const MAX_CONFIGURABLE_DIMENSION: u32 = 100;

/// Grid size limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridSettings {
    /// Largest allowed rows/cols. Must fit the default 5x5 chart and stay
    /// at or below [`MAX_CONFIGURABLE_DIMENSION`].
    #[serde(default = "default_max_dimension")]
    pub max_dimension: u32,
}

fn default_max_dimension() -> u32 {
    MAX_GRID_DIMENSION
}

impl Default for GridSettings {
    fn default() -> Self {
        GridSettings {
            max_dimension: default_max_dimension(),
        }
    }
}

impl GridSettings {
    pub fn limits(&self) -> GridLimits {
        GridLimits::new(self.max_dimension)
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

/// Where the working chart is kept between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory holding the store. `None` means the platform data dir.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Store key; the chart lives at `<data_dir>/<key>.json`.
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_key() -> String {
    "seatingChart".to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_dir: None,
            key: default_key(),
        }
    }
}

// =============================================================================
// Export Settings
// =============================================================================

/// Defaults for `seatplan export`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// File name prefix; the date is appended (`seating-chart-2024-05-01.json`).
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Directory exports are written to when no path is given.
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,
}

fn default_file_prefix() -> String {
    "seating-chart".to_string()
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            file_prefix: default_file_prefix(),
            directory: default_export_dir(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete seatplan configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeatplanConfig {
    #[serde(default)]
    pub grid: GridSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub export: ExportSettings,
}

impl SeatplanConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (seatplan.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading seatplan config from file");
                let contents =
                    std::fs::read_to_string(&path).map_err(|e| StoreError::io(&path, e))?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load seatplan config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Validates the configuration.
    pub fn validate(&self) -> StoreResult<()> {
        let min = DEFAULT_ROWS.max(DEFAULT_COLS);
        let max = MAX_CONFIGURABLE_DIMENSION;
        if !(min..=max).contains(&self.grid.max_dimension) {
            return Err(StoreError::InvalidConfig(format!(
                "grid.max_dimension must be between {} and {}, got {}",
                min, max, self.grid.max_dimension
            )));
        }

        let key = self.storage.key.trim();
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(StoreError::InvalidConfig(format!(
                "storage.key must be a plain file name, got '{}'",
                self.storage.key
            )));
        }

        if self.export.file_prefix.trim().is_empty() {
            return Err(StoreError::InvalidConfig(
                "export.file_prefix cannot be empty".into(),
            ));
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(max) = std::env::var("SEATPLAN_MAX_GRID") {
            match max.parse::<u32>() {
                Ok(max) => {
                    debug!(max, "Overriding max grid dimension from environment");
                    self.grid.max_dimension = max;
                }
                Err(_) => warn!(value = %max, "Ignoring non-numeric SEATPLAN_MAX_GRID"),
            }
        }

        if let Ok(dir) = std::env::var("SEATPLAN_DATA_DIR") {
            debug!(dir = %dir, "Overriding data dir from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Ok(key) = std::env::var("SEATPLAN_STORAGE_KEY") {
            self.storage.key = key;
        }

        if let Ok(dir) = std::env::var("SEATPLAN_EXPORT_DIR") {
            self.export.directory = PathBuf::from(dir);
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("seatplan.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn limits(&self) -> GridLimits {
        self.grid.limits()
    }

    /// Resolves the store directory: configured, else the platform data dir.
    pub fn data_dir(&self) -> StoreResult<PathBuf> {
        match &self.storage.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => project_dirs()
                .map(|dirs| dirs.data_dir().to_path_buf())
                .ok_or(StoreError::NoDataDir),
        }
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("org", "seatplan", "seatplan")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeatplanConfig::default();
        assert_eq!(config.grid.max_dimension, 20);
        assert_eq!(config.storage.key, "seatingChart");
        assert_eq!(config.export.file_prefix, "seating-chart");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = SeatplanConfig::default();

        config.grid.max_dimension = 4;
        assert!(config.validate().is_err());
        config.grid.max_dimension = 5;
        assert!(config.validate().is_ok());
        config.grid.max_dimension = 100;
        assert!(config.validate().is_ok());
        config.grid.max_dimension = 101;
        assert!(config.validate().is_err());
        config.grid.max_dimension = u32::MAX;
        assert!(config.validate().is_err());
        config.grid.max_dimension = 20;

        config.storage.key = "../escape".to_string();
        assert!(config.validate().is_err());
        config.storage.key = "  ".to_string();
        assert!(config.validate().is_err());
        config.storage.key = "classroom-b".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: SeatplanConfig = toml::from_str("[grid]\nmax_dimension = 12\n").unwrap();
        assert_eq!(config.limits(), GridLimits::new(12));
        assert_eq!(config.storage.key, "seatingChart");
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seatplan.toml");
        let data = dir.path().join("data");
        std::fs::write(
            &path,
            format!("[grid]\nmax_dimension = 9\n\n[storage]\ndata_dir = {:?}\n", data),
        )
        .unwrap();

        let loaded = SeatplanConfig::load(Some(path)).unwrap();
        assert_eq!(loaded.grid.max_dimension, 9);
        assert_eq!(loaded.data_dir().unwrap(), data);
    }

    #[test]
    fn test_huge_max_dimension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seatplan.toml");
        std::fs::write(&path, "[grid]\nmax_dimension = 70000\n").unwrap();

        assert!(matches!(
            SeatplanConfig::load(Some(path.clone())),
            Err(StoreError::InvalidConfig(_))
        ));
        assert_eq!(SeatplanConfig::load_or_default(Some(path)).grid.max_dimension, 20);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seatplan.toml");
        std::fs::write(&path, "[grid\nmax_dimension = ").unwrap();

        assert!(matches!(
            SeatplanConfig::load(Some(path)),
            Err(StoreError::ConfigLoadFailed(_))
        ));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seatplan.toml");
        std::fs::write(&path, "[grid]\nmax_dimension = 2\n").unwrap();

        let config = SeatplanConfig::load_or_default(Some(path));
        assert_eq!(config.grid.max_dimension, 20);
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&SeatplanConfig::default()).unwrap();
        assert!(toml_str.contains("[grid]"));
        assert!(toml_str.contains("[export]"));
    }
}
