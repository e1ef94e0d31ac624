//! Rotation conversions between the global (ECEF) frame and the local
//! (surface-relative) frame, plus the consistent pose the far viewport
//! copies each frame.

use glam::{DQuat, DVec3};

use aeris_geodesy::surface_basis;

use crate::state::WorldState;

/// Express a global rotation in the local frame at `position`.
///
/// With basis `B`, the stored local rotation is `B^-1 * global`. Used when
/// teleporting: the desired orientation is computed in world terms and then
/// folded into the frame the near viewport works in.
pub fn global_to_local(global: DQuat, position: DVec3) -> DQuat {
    surface_basis(position).inverse() * global
}

/// Express a local rotation in the global frame at `position`.
///
/// The effective global rotation is `B * local`. Evaluated every frame to
/// orient the planet-scale camera from the shared local orientation.
pub fn local_to_global(local: DQuat, position: DVec3) -> DQuat {
    surface_basis(position) * local
}

/// Position/orientation pair read by the far viewport as one value, so a
/// reader can never observe a position paired with a stale orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    /// Global camera position in meters.
    pub position: DVec3,
    /// Global camera orientation.
    pub orientation: DQuat,
}

/// The pose the planet-scale camera must copy verbatim this frame.
pub fn far_camera_pose(state: &WorldState) -> CameraPose {
    CameraPose {
        position: state.position,
        orientation: local_to_global(state.orientation, state.position),
    }
}
