//! Look-rotation construction shared by the orbit decomposition and the
//! avatar facing logic.

use glam::{DMat3, DQuat, DVec3};

/// Build the rotation whose local -Z axis points along `forward`, rolled so
/// that local +Y lies as close to `up_hint` as possible.
///
/// `forward` must be non-zero; it is normalized internally. When `forward`
/// is (anti)parallel to `up_hint` the roll is ambiguous; an arbitrary but
/// deterministic perpendicular is chosen so the result stays finite.
pub fn look_rotation(forward: DVec3, up_hint: DVec3) -> DQuat {
    let forward = forward.normalize();

    let mut right = forward.cross(up_hint);
    if right.length_squared() < 1e-12 {
        // Forward is aligned with the hint; fall back to any perpendicular.
        let fallback = if forward.x.abs() < 0.9 {
            DVec3::X
        } else {
            DVec3::Z
        };
        right = forward.cross(fallback);
    }
    let right = right.normalize();
    let up = right.cross(forward);

    DQuat::from_mat3(&DMat3::from_cols(right, up, -forward)).normalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_forward_maps_to_neg_z() {
        let q = look_rotation(DVec3::new(1.0, 2.0, -3.0), DVec3::Y);
        let mapped = q * DVec3::NEG_Z;
        assert!((mapped - DVec3::new(1.0, 2.0, -3.0).normalize()).length() < EPSILON);
    }

    #[test]
    fn test_up_stays_near_hint() {
        let q = look_rotation(DVec3::X, DVec3::Y);
        let up = q * DVec3::Y;
        assert!((up - DVec3::Y).length() < EPSILON);
    }

    #[test]
    fn test_result_is_unit() {
        let q = look_rotation(DVec3::new(-0.2, 0.9, 0.4), DVec3::Z);
        assert!((q.length() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_degenerate_up_hint_stays_finite() {
        // Looking straight along the hint axis.
        let q = look_rotation(DVec3::Y, DVec3::Y);
        assert!((q.length() - 1.0).abs() < EPSILON);
        let mapped = q * DVec3::NEG_Z;
        assert!((mapped - DVec3::Y).length() < EPSILON);
    }
}
