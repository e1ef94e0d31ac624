//! Weather presets and their timed rotation.

use serde::{Deserialize, Serialize};

/// Texture channel a cloud layer's density field is sampled from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CloudChannel {
    /// Red channel: low cumulus band.
    R,
    /// Green channel: mid-level band.
    G,
    /// Blue channel: high cirrus band.
    B,
}

/// One cloud layer row as consumed by the atmosphere collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloudLayer {
    /// Density channel.
    pub channel: CloudChannel,
    /// Layer base altitude in meters.
    pub altitude_m: f64,
    /// Layer thickness in meters.
    pub height_m: f64,
    /// Density multiplier; 0 disables the layer.
    pub density_scale: f64,
}

/// A named weather look: overall coverage plus the per-channel layer table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeatherPreset {
    /// Display name.
    pub name: String,
    /// Cloud coverage in `[0, 1]`.
    pub coverage: f64,
    /// Cloud layer rows.
    pub layers: Vec<CloudLayer>,
}

/// The three stock presets, with the layer tables as authored.
pub fn default_presets() -> Vec<WeatherPreset> {
    vec![
        WeatherPreset {
            name: "Clear".to_string(),
            coverage: 0.1,
            layers: vec![
                CloudLayer {
                    channel: CloudChannel::R,
                    altitude_m: 1500.0,
                    height_m: 500.0,
                    density_scale: 0.0,
                },
                CloudLayer {
                    channel: CloudChannel::G,
                    altitude_m: 2500.0,
                    height_m: 800.0,
                    density_scale: 0.0,
                },
                CloudLayer {
                    channel: CloudChannel::B,
                    altitude_m: 7500.0,
                    height_m: 500.0,
                    density_scale: 0.1,
                },
            ],
        },
        WeatherPreset {
            name: "Sunny".to_string(),
            coverage: 0.4,
            layers: vec![
                CloudLayer {
                    channel: CloudChannel::R,
                    altitude_m: 1500.0,
                    height_m: 500.0,
                    density_scale: 0.4,
                },
                CloudLayer {
                    channel: CloudChannel::G,
                    altitude_m: 2500.0,
                    height_m: 800.0,
                    density_scale: 0.0,
                },
                CloudLayer {
                    channel: CloudChannel::B,
                    altitude_m: 7500.0,
                    height_m: 500.0,
                    density_scale: 0.2,
                },
            ],
        },
        WeatherPreset {
            name: "Cloudy".to_string(),
            coverage: 0.75,
            layers: vec![
                CloudLayer {
                    channel: CloudChannel::R,
                    altitude_m: 1500.0,
                    height_m: 500.0,
                    density_scale: 0.6,
                },
                CloudLayer {
                    channel: CloudChannel::G,
                    altitude_m: 2000.0,
                    height_m: 1000.0,
                    density_scale: 0.5,
                },
                CloudLayer {
                    channel: CloudChannel::B,
                    altitude_m: 7500.0,
                    height_m: 500.0,
                    density_scale: 0.0,
                },
            ],
        },
    ]
}

/// Rotates through the preset list on a fixed wall-time interval, never
/// re-selecting the preset that is already active.
#[derive(Clone, Debug)]
pub struct WeatherSchedule {
    presets: Vec<WeatherPreset>,
    interval_s: f64,
    elapsed_s: f64,
    current: usize,
}

impl WeatherSchedule {
    /// Schedule over `presets`, switching every `interval_s` seconds.
    /// Starts on the second preset (the default "Sunny" look) when there
    /// are at least two, mirroring the viewer's startup weather.
    pub fn new(presets: Vec<WeatherPreset>, interval_s: f64) -> Self {
        let current = if presets.len() > 1 { 1 } else { 0 };
        Self {
            presets,
            interval_s,
            elapsed_s: 0.0,
            current,
        }
    }

    /// The active preset.
    pub fn current(&self) -> &WeatherPreset {
        &self.presets[self.current]
    }

    /// Advance by `dt` real seconds. Returns the new preset when the
    /// interval elapses, `None` otherwise.
    pub fn advance(&mut self, dt: f64) -> Option<&WeatherPreset> {
        self.elapsed_s += dt;
        if self.elapsed_s < self.interval_s || self.presets.len() < 2 {
            return None;
        }
        self.elapsed_s -= self.interval_s;
        self.current = (self.current + 1) % self.presets.len();
        let next = &self.presets[self.current];
        tracing::info!(preset = %next.name, "weather changed");
        Some(next)
    }
}
