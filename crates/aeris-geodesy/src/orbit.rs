//! Orbit-style camera pose: heading/pitch/distance relative to a surface
//! point, decomposed into an ECEF position and a global orientation.

use glam::{DQuat, DVec3};

use crate::enu::EnuFrame;
use crate::geodetic_to_ecef;
use crate::rotation::look_rotation;

/// A viewing pose described relative to a target point on the ellipsoid:
/// the camera sits `distance` meters from the target, displaced opposite
/// its viewing direction, which is given by compass `heading` (radians,
/// clockwise from north) and `pitch` (radians, negative looks down).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPose {
    /// Distance from the target point in meters.
    pub distance: f64,
    /// Compass heading in radians, measured clockwise from north.
    pub heading: f64,
    /// Elevation of the view direction in radians. Negative pitches the
    /// view below the local horizon.
    pub pitch: f64,
}

impl OrbitPose {
    /// Create an orbit pose from distance and view angles (radians).
    pub fn new(distance: f64, heading: f64, pitch: f64) -> Self {
        Self {
            distance,
            heading,
            pitch,
        }
    }

    /// Decompose the pose at a geodetic target (radians, on the ellipsoid
    /// surface) into an ECEF camera position and a global orientation.
    ///
    /// The orientation looks along the heading/pitch direction with the
    /// local surface normal as the roll reference. At `pitch = -pi/2` the
    /// view direction collapses onto the normal and the roll reference
    /// falls back to north.
    pub fn decompose(&self, longitude_rad: f64, latitude_rad: f64) -> (DVec3, DQuat) {
        let target = geodetic_to_ecef(longitude_rad, latitude_rad, 0.0);
        let frame = EnuFrame::at(longitude_rad, latitude_rad);

        let (sin_heading, cos_heading) = self.heading.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        let tangent = frame.north * cos_heading + frame.east * sin_heading;
        let direction = tangent * cos_pitch + frame.up * sin_pitch;

        let up_hint = if direction.cross(frame.up).length_squared() < 1e-12 {
            frame.north
        } else {
            frame.up
        };

        let position = target - direction * self.distance;
        let orientation = look_rotation(direction, up_hint);
        (position, orientation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_zero_heading_looks_north() {
        let pose = OrbitPose::new(1000.0, 0.0, 0.0);
        let (_, q) = pose.decompose(0.0, 0.0);
        let frame = EnuFrame::at(0.0, 0.0);
        let forward = q * DVec3::NEG_Z;
        assert!((forward - frame.north).length() < EPSILON);
    }

    #[test]
    fn test_heading_south_reverses_forward() {
        let pose = OrbitPose::new(1000.0, std::f64::consts::PI, 0.0);
        let (_, q) = pose.decompose(2.439, 0.6227);
        let frame = EnuFrame::at(2.439, 0.6227);
        let forward = q * DVec3::NEG_Z;
        assert!((forward + frame.north).length() < 1e-9);
    }

    #[test]
    fn test_position_sits_distance_from_target() {
        let pose = OrbitPose::new(4000.0, 0.3, -0.2);
        let (pos, _) = pose.decompose(2.42, 0.616);
        let target = geodetic_to_ecef(2.42, 0.616, 0.0);
        assert!(((pos - target).length() - 4000.0).abs() < 1e-6);
    }

    #[test]
    fn test_negative_pitch_places_camera_above_horizon() {
        let pose = OrbitPose::new(1000.0, 0.0, -0.1);
        let (pos, _) = pose.decompose(0.0, 0.0);
        let target = geodetic_to_ecef(0.0, 0.0, 0.0);
        let frame = EnuFrame::at(0.0, 0.0);
        // Looking down means the camera was pushed up along the normal.
        assert!((pos - target).dot(frame.up) > 0.0);
    }

    #[test]
    fn test_straight_down_pose_is_finite() {
        let pose = OrbitPose::new(100_000.0, 0.0, -std::f64::consts::FRAC_PI_2);
        let (pos, q) = pose.decompose(2.439, 0.6227);
        let frame = EnuFrame::at(2.439, 0.6227);
        assert!((q.length() - 1.0).abs() < EPSILON);
        let forward = q * DVec3::NEG_Z;
        assert!((forward + frame.up).length() < 1e-9);
        let target = geodetic_to_ecef(2.439, 0.6227, 0.0);
        assert!((pos - target).dot(frame.up) > 0.0);
    }
}
