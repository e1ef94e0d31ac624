//! Sun direction and intensity from the simulated hour of day.

use glam::DVec3;

/// Daylight intensity handed to the directional light.
const DAY_INTENSITY: f64 = 3.0;

/// Residual intensity once the sun has dipped below the horizon; keeps the
/// scene readable at night instead of going fully black.
const NIGHT_INTENSITY: f64 = 0.1;

/// Unit direction toward the sun for the given hour of day.
///
/// Daylight runs 06:00 to 18:00: the sun sweeps a half-circle from east to
/// west, tilted slightly off the meridian plane. Outside that window the
/// direction points straight down (sun below the nadir), which the
/// intensity rule treats as night.
pub fn sun_direction(hour_of_day: f64) -> DVec3 {
    if !(6.0..=18.0).contains(&hour_of_day) {
        return DVec3::NEG_Y;
    }
    let angle = (hour_of_day - 6.0) / 12.0 * std::f64::consts::PI;
    DVec3::new(-angle.cos(), angle.sin(), 0.2).normalize()
}

/// Intensity for the directional sun light: full strength while the sun is
/// up, dimmed once its vertical component drops below -0.1.
pub fn sun_intensity(direction: DVec3) -> f64 {
    if direction.y < -0.1 {
        NIGHT_INTENSITY
    } else {
        DAY_INTENSITY
    }
}
