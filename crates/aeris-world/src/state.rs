//! The mutable world-state record shared by both viewport phases.

use glam::{DQuat, DVec3};

use aeris_geodesy::EQUATORIAL_RADIUS_M;

/// Shared position/orientation/speed record.
///
/// Exactly one instance exists per process, owned by the frame coordinator
/// and passed by reference to the viewport phases; there is no ambient
/// singleton. Fields are mutated in place every rendered frame and the
/// record lives for the process lifetime.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldState {
    /// Global position in the ECEF-like frame, meters. After every
    /// [`advance`](crate::advance) call its magnitude is at least the local
    /// ellipsoid radius plus the minimum-altitude margin.
    pub position: DVec3,
    /// Orientation in the *local* frame: relative to the surface-alignment
    /// basis at `position`, not to global axes. Always unit-length.
    pub orientation: DQuat,
    /// Base movement rate in meters per second, before boost and dt scaling.
    pub speed: f64,
}

impl WorldState {
    /// Starting state: 100 km above the equator on the +Y axis, identity
    /// local orientation, 1000 m/s base speed.
    pub fn new() -> Self {
        Self {
            position: DVec3::new(0.0, EQUATORIAL_RADIUS_M + 100_000.0, 0.0),
            orientation: DQuat::IDENTITY,
            speed: 1000.0,
        }
    }

    /// Meters between the current position and the reference ellipsoid
    /// surface at the implied latitude.
    pub fn altitude(&self) -> f64 {
        self.position.length() - aeris_geodesy::local_radius(self.position)
    }
}

impl Default for WorldState {
    fn default() -> Self {
        Self::new()
    }
}
