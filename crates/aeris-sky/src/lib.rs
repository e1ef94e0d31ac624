//! Sky state for the Aeris viewer: weather presets with timed rotation,
//! the scaled simulation clock, and the sun direction/intensity rule.
//!
//! Cloud rendering itself is the atmosphere collaborator's job; this crate
//! only decides which preset is active and where the sun is.

mod clock;
mod sun;
mod weather;

pub use clock::SimClock;
pub use sun::{sun_direction, sun_intensity};
pub use weather::{CloudChannel, CloudLayer, WeatherPreset, WeatherSchedule, default_presets};
