//! Surface-alignment basis: the rotation carrying canonical +Y onto the
//! local outward normal.

use glam::{DQuat, DVec3};

/// Minimal rotation mapping the canonical up axis `(0, 1, 0)` onto
/// `normalize(position)`.
///
/// Recomputed from scratch on every call; the basis changes continuously as
/// the position moves, so callers must never cache it across frames.
///
/// Positions with squared length below `0.1` return the identity rotation.
/// That guards the exact-origin singularity only; it makes no attempt to
/// preserve basis continuity through the degenerate region.
pub fn surface_basis(position: DVec3) -> DQuat {
    if position.length_squared() < 0.1 {
        return DQuat::IDENTITY;
    }
    DQuat::from_rotation_arc(DVec3::Y, position.normalize())
}
