//! Teleport: jump the shared state to a named geodetic location.

use aeris_geodesy::{OrbitPose, geodetic_to_ecef};

use crate::frame::global_to_local;
use crate::preset::LocationPreset;
use crate::state::WorldState;

/// Move the shared state to `preset` in one call.
///
/// The true position comes from a plain geodetic-to-ECEF conversion of
/// (longitude, latitude, altitude). The orientation comes from an
/// [`OrbitPose`] decomposition at the *surface* point: heading and pitch
/// define a viewing direction from some orbit distance, but only the
/// orientation half is kept; the position the decomposition produces
/// assumes a look-at constraint we do not want, so it is discarded.
///
/// Both fields are written before this returns, so the frame phases never
/// observe a half-applied teleport. Presets are trusted static data; the
/// only defensive branches are the numeric guards inside the geodesy layer.
pub fn teleport(state: &mut WorldState, preset: &LocationPreset) {
    let lon = preset.longitude_deg.to_radians();
    let lat = preset.latitude_deg.to_radians();

    let position = geodetic_to_ecef(lon, lat, preset.altitude_m);

    let pose = OrbitPose::new(
        preset.altitude_m,
        preset.heading_deg.to_radians(),
        preset.pitch_deg.to_radians(),
    );
    let (_, global_orientation) = pose.decompose(lon, lat);

    state.position = position;
    state.orientation = global_to_local(global_orientation, position);
}
