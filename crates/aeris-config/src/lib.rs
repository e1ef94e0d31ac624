//! Configuration for the Aeris viewer.
//!
//! Runtime-tunable settings persisted as RON, with CLI overrides via clap
//! and forward/backward compatible serialization. Location presets are
//! part of the config so users can add their own teleport targets.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, MovementConfig, SkyConfig, ZoomConfig, default_locations};
pub use error::ConfigError;
