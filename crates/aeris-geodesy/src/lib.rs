//! WGS84 ellipsoid math for the Aeris viewer: radius-at-latitude,
//! geodetic/ECEF conversion, surface-aligned bases, and orbit-style
//! camera pose decomposition.

mod basis;
mod ellipsoid;
mod enu;
mod orbit;
mod rotation;

pub use basis::surface_basis;
pub use ellipsoid::{EQUATORIAL_RADIUS_M, POLAR_RADIUS_M, geodetic_to_ecef, local_radius};
pub use enu::EnuFrame;
pub use orbit::OrbitPose;
pub use rotation::look_rotation;
