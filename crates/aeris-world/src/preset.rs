//! Named teleport targets.

use serde::{Deserialize, Serialize};

/// A named viewing location: geodetic coordinates plus the initial view
/// angles. Immutable configuration data consumed by
/// [`teleport`](crate::teleport); angles are authored in degrees and
/// converted to radians only at the point of use.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationPreset {
    /// Display name shown in the UI.
    pub name: String,
    /// Geodetic longitude in degrees, positive east.
    pub longitude_deg: f64,
    /// Geodetic latitude in degrees, positive north.
    pub latitude_deg: f64,
    /// Compass heading in degrees, clockwise from north.
    pub heading_deg: f64,
    /// View pitch in degrees, negative looks down.
    pub pitch_deg: f64,
    /// Height above the ellipsoid in meters.
    pub altitude_m: f64,
}
