use crate::cartesian::NewCartesianPoint2d;
use crate::geo::ellipsoid::Ellipsoid;
use crate::geo::traits::point::NewGeoPoint;
use crate::geo::traits::projection::Projection;
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::marker::PhantomData;

/// Largest latitude (in radians) representable by the projection: the latitude for which the projected square
/// world has equal width and height.
pub const MAX_LATITUDE: f64 = 1.484_422_229_745_332_4;

/// Spherical Web Mercator (EPSG:3857) projection using the semimajor axis of the given ellipsoid as the sphere
/// radius.
///
/// Latitudes beyond [`MAX_LATITUDE`] are clamped. Distances on the projected plane are stretched by `1 / cos(lat)`,
/// so the projection is only suitable for metric calculations over small extents away from the poles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WebMercator<In, Out> {
    ellipsoid: Ellipsoid,
    phantom_in: PhantomData<In>,
    phantom_out: PhantomData<Out>,
}

impl<In, Out> WebMercator<In, Out> {
    /// Creates a new projection for the given ellipsoid.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            phantom_in: Default::default(),
            phantom_out: Default::default(),
        }
    }
}

impl<In, Out> Default for WebMercator<In, Out> {
    fn default() -> Self {
        Self::new(Ellipsoid::WGS84)
    }
}

/// Projects longitude and latitude in radians. Non-finite input propagates into the output.
fn mercator_forward(radius: f64, lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = radius * lon;
    let y = radius * (FRAC_PI_4 + lat / 2.0).tan().ln();
    (x, y)
}

/// Inverse of [`mercator_forward`], returns longitude and latitude in radians.
fn mercator_inverse(radius: f64, x: f64, y: f64) -> (f64, f64) {
    let lon = x / radius;
    let lat = FRAC_PI_2 - 2.0 * (-y / radius).exp().atan();
    (lon, lat)
}

impl<In: NewGeoPoint<f64>, Out: NewCartesianPoint2d<f64>> Projection for WebMercator<In, Out> {
    type InPoint = In;
    type OutPoint = Out;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let (x, y) = mercator_forward(self.ellipsoid.semimajor(), input.lon_rad(), input.lat_rad());

        if x.is_finite() && y.is_finite() {
            Some(Self::OutPoint::new(x, y))
        } else {
            None
        }
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let (lon, lat) = mercator_inverse(self.ellipsoid.semimajor(), input.x(), input.y());

        if lon.is_finite() && lat.is_finite() {
            Some(Self::InPoint::latlon(lat.to_degrees(), lon.to_degrees()))
        } else {
            None
        }
    }
}
