use crate::geo::traits::point::{GeoPoint, NewGeoPoint};
use serde::{Deserialize, Serialize};

/// Geodetic position: longitude and latitude in radians and height above the ellipsoid in meters.
///
/// Convert it to and from cartesian positions with [`Ellipsoid`](crate::geo::Ellipsoid).
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct GeodeticPoint {
    lon: f64,
    lat: f64,
    height: f64,
}

impl GeodeticPoint {
    /// Creates a new point from longitude and latitude in radians.
    pub const fn from_radians(lon: f64, lat: f64, height: f64) -> Self {
        Self { lon, lat, height }
    }

    /// Creates a new point from longitude and latitude in degrees.
    pub fn from_degrees(lon: f64, lat: f64, height: f64) -> Self {
        Self {
            lon: lon.to_radians(),
            lat: lat.to_radians(),
            height,
        }
    }

    /// Height above the ellipsoid surface in meters.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Copy of the point at a different height.
    pub fn with_height(&self, height: f64) -> Self {
        Self { height, ..*self }
    }
}

impl GeoPoint for GeodeticPoint {
    type Num = f64;

    fn lat(&self) -> f64 {
        self.lat.to_degrees()
    }

    fn lon(&self) -> f64 {
        self.lon.to_degrees()
    }

    fn lat_rad(&self) -> f64 {
        self.lat
    }

    fn lon_rad(&self) -> f64 {
        self.lon
    }
}

impl NewGeoPoint<f64> for GeodeticPoint {
    fn latlon(lat: f64, lon: f64) -> Self {
        Self::from_degrees(lon, lat, 0.0)
    }
}
