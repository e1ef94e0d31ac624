//! Smoothed model rotation toward the movement direction.

use glam::{DQuat, DVec3};

use aeris_geodesy::look_rotation;

/// Rotation-tracking rate: the slerp factor is `rate * dt`, clamped to 1.
const TURN_RATE: f64 = 10.0;

/// Slerp the avatar's model rotation toward the camera-relative movement
/// direction.
///
/// `planar_dir` is the axis-aligned intent from the movement flags in the
/// camera's local frame; it is rotated by `camera` before use. The model
/// mesh faces its local -Z, so the target rotation points -Z along the
/// movement direction with +Y kept upward. A zero direction returns
/// `current` unchanged (the avatar holds its last facing while hovering).
pub fn face_movement(current: DQuat, planar_dir: DVec3, camera: DQuat, dt: f64) -> DQuat {
    if planar_dir.length_squared() == 0.0 {
        return current;
    }
    let world_dir = camera * planar_dir.normalize();
    let target = look_rotation(world_dir, DVec3::Y);
    current.slerp(target, (TURN_RATE * dt).min(1.0))
}
