//! WGS84 reference ellipsoid: radius-at-latitude and geodetic-to-ECEF
//! conversion.
//!
//! The ECEF frame used throughout Aeris is the standard one: the Z axis is
//! the polar axis, the X axis pierces the equator at the prime meridian,
//! and Y completes the right-handed triad. All distances are meters.

use glam::DVec3;

/// WGS84 semi-major (equatorial) axis in meters.
pub const EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;

/// WGS84 semi-minor (polar) axis in meters.
pub const POLAR_RADIUS_M: f64 = 6_356_752.314_245;

/// Distance from Earth's center to the reference ellipsoid surface at the
/// latitude implied by `position`.
///
/// The latitude is taken from the position itself: `position.z / |position|`
/// is treated as sin(latitude). The result is always within
/// `[POLAR_RADIUS_M, EQUATORIAL_RADIUS_M]`.
///
/// Positions closer than 100 m to the origin have no meaningful latitude;
/// the equatorial radius is returned for those rather than dividing by a
/// near-zero magnitude.
pub fn local_radius(position: DVec3) -> f64 {
    let a = EQUATORIAL_RADIUS_M;
    let b = POLAR_RADIUS_M;

    let r = position.length();
    if r < 100.0 {
        return a;
    }

    let sin_phi = position.z / r;
    let cos_phi = (1.0 - sin_phi * sin_phi).max(0.0).sqrt();

    // Radius of an ellipse at geodetic latitude phi:
    // sqrt(((a^2 cos)^2 + (b^2 sin)^2) / ((a cos)^2 + (b sin)^2))
    let a_cos = a * cos_phi;
    let b_sin = b * sin_phi;
    let num = (a * a_cos) * (a * a_cos) + (b * b_sin) * (b * b_sin);
    let den = a_cos * a_cos + b_sin * b_sin;

    (num / den).sqrt()
}

/// Convert geodetic coordinates (radians, meters above the ellipsoid) to an
/// ECEF position.
pub fn geodetic_to_ecef(longitude_rad: f64, latitude_rad: f64, height_m: f64) -> DVec3 {
    let a = EQUATORIAL_RADIUS_M;
    let b = POLAR_RADIUS_M;
    let e2 = 1.0 - (b * b) / (a * a);

    let (sin_lat, cos_lat) = latitude_rad.sin_cos();
    let (sin_lon, cos_lon) = longitude_rad.sin_cos();

    // Prime vertical radius of curvature.
    let n = a / (1.0 - e2 * sin_lat * sin_lat).sqrt();

    DVec3::new(
        (n + height_m) * cos_lat * cos_lon,
        (n + height_m) * cos_lat * sin_lon,
        (n * (1.0 - e2) + height_m) * sin_lat,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON_M: f64 = 1e-6;

    #[test]
    fn test_radius_at_equator_is_semi_major() {
        let pos = DVec3::new(EQUATORIAL_RADIUS_M, 0.0, 0.0);
        assert!((local_radius(pos) - EQUATORIAL_RADIUS_M).abs() < EPSILON_M);
    }

    #[test]
    fn test_radius_at_pole_is_semi_minor() {
        let pos = DVec3::new(0.0, 0.0, POLAR_RADIUS_M);
        assert!((local_radius(pos) - POLAR_RADIUS_M).abs() < EPSILON_M);

        let south = DVec3::new(0.0, 0.0, -POLAR_RADIUS_M);
        assert!((local_radius(south) - POLAR_RADIUS_M).abs() < EPSILON_M);
    }

    #[test]
    fn test_radius_always_within_ellipsoid_bounds() {
        let samples = [
            DVec3::new(1.0, 2.0, 3.0).normalize() * 7_000_000.0,
            DVec3::new(-4.0, 0.5, -2.0).normalize() * 6_400_000.0,
            DVec3::new(0.1, -0.9, 0.7).normalize() * 10_000_000.0,
            DVec3::new(1.0, 0.0, 1.0).normalize() * 6_378_137.0,
        ];
        for pos in samples {
            let r = local_radius(pos);
            assert!(
                (POLAR_RADIUS_M..=EQUATORIAL_RADIUS_M).contains(&r),
                "radius {r} out of bounds for {pos:?}"
            );
        }
    }

    #[test]
    fn test_radius_independent_of_magnitude() {
        let dir = DVec3::new(0.3, 0.5, 0.8).normalize();
        let near = local_radius(dir * 6_400_000.0);
        let far = local_radius(dir * 60_000_000.0);
        assert!((near - far).abs() < 1e-3);
    }

    #[test]
    fn test_near_origin_falls_back_to_equatorial() {
        assert_eq!(local_radius(DVec3::ZERO), EQUATORIAL_RADIUS_M);
        assert_eq!(local_radius(DVec3::new(0.0, 0.0, 99.0)), EQUATORIAL_RADIUS_M);
    }

    #[test]
    fn test_ecef_on_equator_prime_meridian() {
        let p = geodetic_to_ecef(0.0, 0.0, 0.0);
        assert!((p.x - EQUATORIAL_RADIUS_M).abs() < EPSILON_M);
        assert!(p.y.abs() < EPSILON_M);
        assert!(p.z.abs() < EPSILON_M);
    }

    #[test]
    fn test_ecef_at_north_pole() {
        let p = geodetic_to_ecef(0.0, std::f64::consts::FRAC_PI_2, 0.0);
        assert!(p.x.abs() < 1e-3);
        assert!(p.y.abs() < 1e-3);
        assert!((p.z - POLAR_RADIUS_M).abs() < 1e-3);
    }

    #[test]
    fn test_ecef_altitude_extends_along_normal() {
        let surface = geodetic_to_ecef(0.5, 0.6, 0.0);
        let raised = geodetic_to_ecef(0.5, 0.6, 1000.0);
        let delta = raised - surface;
        assert!((delta.length() - 1000.0).abs() < 1e-6);
    }

    #[test]
    fn test_ecef_surface_point_matches_local_radius() {
        // A point on the ellipsoid surface sits within the geodetic-vs-
        // geocentric latitude discrepancy of the radius-at-latitude model.
        let p = geodetic_to_ecef(2.4, -0.7, 0.0);
        let r = local_radius(p);
        assert!(
            (p.length() - r).abs() < 50.0,
            "surface magnitude {} vs local radius {r}",
            p.length()
        );
    }

    #[test]
    fn test_ecef_deterministic() {
        let a = geodetic_to_ecef(2.439, 0.6227, 1100.0);
        let b = geodetic_to_ecef(2.439, 0.6227, 1100.0);
        assert_eq!(a, b);
    }
}
