//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use aeris_world::LocationPreset;

use crate::error::ConfigError;

/// Top-level viewer configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Movement settings.
    pub movement: MovementConfig,
    /// Near-camera zoom damping settings.
    pub zoom: ZoomConfig,
    /// Sky/weather settings.
    pub sky: SkyConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
    /// Teleport targets offered by the UI.
    pub locations: Vec<LocationPreset>,
}

/// Movement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    /// Base movement speed in meters per second.
    pub base_speed_m_s: f64,
}

/// Zoom damping configuration for the near camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ZoomConfig {
    /// Forward offset approached while moving, meters.
    pub max_offset_m: f64,
    /// Damping rate per second.
    pub rate_per_s: f64,
}

/// Sky configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SkyConfig {
    /// Wall-time seconds between weather preset changes.
    pub weather_interval_s: f64,
    /// Simulated seconds per real second for the sun clock.
    pub time_scale: f64,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

/// The stock teleport targets shipped with the viewer.
pub fn default_locations() -> Vec<LocationPreset> {
    vec![
        LocationPreset {
            name: "Tokyo".to_string(),
            longitude_deg: 139.7671,
            latitude_deg: 35.6812,
            heading_deg: 180.0,
            pitch_deg: -5.0,
            altitude_m: 1100.0,
        },
        LocationPreset {
            name: "Fuji".to_string(),
            longitude_deg: 138.7278,
            latitude_deg: 35.3206,
            heading_deg: 0.0,
            pitch_deg: -10.0,
            altitude_m: 4000.0,
        },
        LocationPreset {
            name: "Space".to_string(),
            longitude_deg: 139.7671,
            latitude_deg: 35.6812,
            heading_deg: 0.0,
            pitch_deg: -90.0,
            altitude_m: 100_000.0,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            movement: MovementConfig::default(),
            zoom: ZoomConfig::default(),
            sky: SkyConfig::default(),
            debug: DebugConfig::default(),
            locations: default_locations(),
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            base_speed_m_s: 1000.0,
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            max_offset_m: 10.0,
            rate_per_s: 2.0,
        }
    }
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            weather_interval_s: 300.0,
            time_scale: 100.0,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Read {
                path: config_path.clone(),
                source: e,
            })?;
            let config: Config = ron::from_str(&contents).map_err(|e| ConfigError::Parse {
                path: config_path.clone(),
                source: e,
            })?;
            tracing::info!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            tracing::info!("created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|e| ConfigError::Write {
            path: config_path.clone(),
            source: e,
        })?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Read {
            path: config_path.clone(),
            source: e,
        })?;
        let new_config: Config = ron::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: config_path.clone(),
            source: e,
        })?;

        if &new_config != self {
            tracing::info!("config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Find a location preset by name (case-sensitive).
    pub fn location(&self, name: &str) -> Option<&LocationPreset> {
        self.locations.iter().find(|l| l.name == name)
    }
}
