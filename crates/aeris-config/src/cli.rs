//! Command-line argument parsing for the Aeris viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Aeris viewer command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "aeris", about = "Aeris planetary avatar viewer")]
pub struct CliArgs {
    /// Teleport to this location preset at startup.
    #[arg(long)]
    pub location: Option<String>,

    /// Base movement speed in meters per second.
    #[arg(long)]
    pub speed: Option<f64>,

    /// Sun clock time scale (simulated seconds per real second).
    #[arg(long)]
    pub time_scale: Option<f64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seconds of simulated flight for the headless demo loop.
    #[arg(long, default_value_t = 10.0)]
    pub duration: f64,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(speed) = args.speed {
            self.movement.base_speed_m_s = speed;
        }
        if let Some(scale) = args.time_scale {
            self.sky.time_scale = scale;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
