//! Per-frame movement: rotates keyboard intent through the near camera and
//! the surface basis, applies it in the global frame, and enforces the
//! minimum-altitude floor.

use glam::{DQuat, DVec3};

use aeris_geodesy::{local_radius, surface_basis};

use crate::state::WorldState;

/// Hard floor above the ellipsoid surface, meters. The clamp in [`advance`]
/// rescales the position to exactly this margin; it is not a soft spring.
pub const MIN_ALTITUDE_MARGIN_M: f64 = 10.0;

/// One frame's worth of user input, sampled once per frame and passed by
/// value; the movement logic never polls any ambient key table.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Move along local -Z.
    pub forward: bool,
    /// Move along local +Z.
    pub back: bool,
    /// Move along local -X.
    pub left: bool,
    /// Move along local +X.
    pub right: bool,
    /// Climb along the global up direction.
    pub ascend: bool,
    /// Descend along the global up direction.
    pub descend: bool,
    /// Double the effective speed while held.
    pub boost: bool,
    /// The near camera's current orientation relative to the avatar. Used
    /// to rotate planar movement intent into the local frame, and copied
    /// into the world state as the authoritative orientation.
    pub orientation: DQuat,
}

impl FrameInput {
    /// Whether any planar (WASD) movement flag is held.
    pub fn planar_active(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }

    /// Whether any movement flag at all is held, including altitude keys.
    pub fn any_active(&self) -> bool {
        self.planar_active() || self.ascend || self.descend
    }

    /// The axis-aligned movement direction in the camera's local frame.
    /// Zero when no planar flag is held.
    pub fn planar_direction(&self) -> DVec3 {
        let mut dir = DVec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.back {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

/// Advance the shared state by one frame of input.
///
/// Runs once per rendered frame from the near viewport's phase, the only
/// phase that reads user input. Movement intent is rotated first by the
/// camera orientation, then by the surface basis, so "forward" always means
/// forward on screen regardless of where on the planet the avatar is.
///
/// After movement the position is clamped to the minimum-altitude floor:
/// if its magnitude falls below `local_radius + MIN_ALTITUDE_MARGIN_M` it
/// is rescaled to exactly that length along its current direction. Finally
/// the input orientation is copied into the state; the near viewport is the
/// authority for orientation, the far viewport only reads it.
pub fn advance(state: &mut WorldState, input: &FrameInput, dt: f64) {
    let basis = surface_basis(state.position);

    let step = state.speed * if input.boost { 2.0 } else { 1.0 } * dt;

    // Altitude control along the global up, independent of view direction.
    let up = state.position.normalize();
    if input.ascend {
        state.position += up * step;
    }
    if input.descend {
        state.position -= up * step;
    }

    let local_dir = input.planar_direction();
    if local_dir.length_squared() > 0.0 {
        let global_dir = basis * (input.orientation * local_dir.normalize());
        state.position += global_dir * step;
    }

    let min_distance = local_radius(state.position) + MIN_ALTITUDE_MARGIN_M;
    if state.position.length() < min_distance {
        state.position = state.position.normalize() * min_distance;
    }

    state.orientation = input.orientation;
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeris_geodesy::EQUATORIAL_RADIUS_M;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn test_zero_input_leaves_state_unchanged() {
        let mut state = WorldState::new();
        let before = state;
        let input = FrameInput::default();
        for _ in 0..1000 {
            advance(&mut state, &input, DT);
        }
        assert_eq!(state.position, before.position);
        assert_eq!(state.orientation, before.orientation);
    }

    #[test]
    fn test_forward_moves_at_base_speed() {
        let mut state = WorldState::new();
        let before = state.position;
        let input = FrameInput {
            forward: true,
            ..Default::default()
        };
        advance(&mut state, &input, 1.0);
        assert!(((state.position - before).length() - state.speed).abs() < 1e-6);
    }

    #[test]
    fn test_boost_doubles_displacement() {
        let input = FrameInput {
            forward: true,
            ..Default::default()
        };
        let boosted = FrameInput {
            boost: true,
            ..input
        };

        let mut plain = WorldState::new();
        let mut fast = WorldState::new();
        let origin = plain.position;
        advance(&mut plain, &input, DT);
        advance(&mut fast, &boosted, DT);

        let d_plain = (plain.position - origin).length();
        let d_fast = (fast.position - origin).length();
        assert!((d_fast - 2.0 * d_plain).abs() < 1e-9);
    }

    #[test]
    fn test_diagonal_input_is_normalized() {
        let mut state = WorldState::new();
        let before = state.position;
        let input = FrameInput {
            forward: true,
            right: true,
            ..Default::default()
        };
        advance(&mut state, &input, 1.0);
        assert!(((state.position - before).length() - state.speed).abs() < 1e-6);
    }

    #[test]
    fn test_opposing_flags_cancel() {
        let mut state = WorldState::new();
        let before = state.position;
        let input = FrameInput {
            forward: true,
            back: true,
            left: true,
            right: true,
            ..Default::default()
        };
        advance(&mut state, &input, 1.0);
        assert_eq!(state.position, before);
    }

    #[test]
    fn test_ascend_moves_along_global_up() {
        let mut state = WorldState::new();
        let up = state.position.normalize();
        let before = state.position;
        let input = FrameInput {
            ascend: true,
            ..Default::default()
        };
        advance(&mut state, &input, 1.0);
        let delta = state.position - before;
        assert!((delta - up * state.speed).length() < 1e-6);
    }

    #[test]
    fn test_descend_cannot_penetrate_altitude_floor() {
        let mut state = WorldState::new();
        let input = FrameInput {
            descend: true,
            boost: true,
            ..Default::default()
        };
        // 100 km of altitude at 2 km/s boosted; drive well past the surface.
        for _ in 0..5000 {
            advance(&mut state, &input, DT);
            let floor = local_radius(state.position) + MIN_ALTITUDE_MARGIN_M;
            assert!(
                state.position.length() >= floor - 1e-6,
                "altitude floor violated: {} < {}",
                state.position.length(),
                floor
            );
        }
        // Long enough to have hit the clamp.
        let floor = local_radius(state.position) + MIN_ALTITUDE_MARGIN_M;
        assert!((state.position.length() - floor).abs() < 1e-6);
    }

    #[test]
    fn test_altitude_floor_holds_under_arbitrary_input() {
        let mut state = WorldState::new();
        state.position = state.position.normalize() * (EQUATORIAL_RADIUS_M + 50.0);

        // Deterministic pseudo-arbitrary flag pattern.
        for i in 0u32..2000 {
            let input = FrameInput {
                forward: i % 3 == 0,
                back: i % 7 == 0,
                left: i % 5 == 1,
                right: i % 11 == 2,
                ascend: i % 13 == 3,
                descend: i % 2 == 0,
                boost: i % 17 == 4,
                orientation: DQuat::from_rotation_y(f64::from(i) * 0.01)
                    * DQuat::from_rotation_x(-0.3),
            };
            advance(&mut state, &input, DT);
            let floor = local_radius(state.position) + MIN_ALTITUDE_MARGIN_M;
            assert!(state.position.length() >= floor - 1e-6);
        }
    }

    #[test]
    fn test_orientation_follows_input_camera() {
        let mut state = WorldState::new();
        let cam = DQuat::from_rotation_y(1.1) * DQuat::from_rotation_x(-0.2);
        let input = FrameInput {
            orientation: cam,
            ..Default::default()
        };
        advance(&mut state, &input, DT);
        assert_eq!(state.orientation, cam);
    }

    #[test]
    fn test_camera_orientation_steers_planar_movement() {
        // Yaw the camera 90 degrees; "forward" should move along the yawed
        // direction rather than the unrotated -Z.
        let mut straight = WorldState::new();
        let mut yawed = WorldState::new();
        let origin = straight.position;

        let forward = FrameInput {
            forward: true,
            ..Default::default()
        };
        let forward_yawed = FrameInput {
            forward: true,
            orientation: DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2),
            ..Default::default()
        };
        advance(&mut straight, &forward, 1.0);
        advance(&mut yawed, &forward_yawed, 1.0);

        let d_straight = (straight.position - origin).normalize();
        let d_yawed = (yawed.position - origin).normalize();
        assert!(d_straight.dot(d_yawed).abs() < 1e-6);
    }
}
