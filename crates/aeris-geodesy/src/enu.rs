//! East-north-up tangent frames on the ellipsoid.

use glam::DVec3;

/// The local east/north/up unit vectors at a geodetic location, expressed
/// in ECEF coordinates. Forms a right-handed triad:
/// `east x north = up`, `north x up = east`, `up x east = north`.
#[derive(Clone, Copy, Debug)]
pub struct EnuFrame {
    /// Unit vector pointing due east along the local parallel.
    pub east: DVec3,
    /// Unit vector pointing due north along the local meridian.
    pub north: DVec3,
    /// Unit vector along the outward ellipsoid normal.
    pub up: DVec3,
}

impl EnuFrame {
    /// Compute the tangent frame at the given geodetic longitude/latitude
    /// (radians).
    pub fn at(longitude_rad: f64, latitude_rad: f64) -> Self {
        let (sin_lat, cos_lat) = latitude_rad.sin_cos();
        let (sin_lon, cos_lon) = longitude_rad.sin_cos();

        Self {
            east: DVec3::new(-sin_lon, cos_lon, 0.0),
            north: DVec3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat),
            up: DVec3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
        }
    }
}
