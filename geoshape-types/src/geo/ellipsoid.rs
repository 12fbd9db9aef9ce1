use serde::{Deserialize, Serialize};

use crate::cartesian::{CartesianPoint3d, Vector3};
use crate::geo::impls::GeodeticPoint;
use crate::geo::traits::point::GeoPoint;
use crate::{GeoShapeError, Position3};

/// Points closer to the ellipsoid center than this (in squared radii units) are not scaled to the surface with
/// Newton iterations.
const CENTER_TOLERANCE_SQ: f64 = 0.1;
const SURFACE_EPSILON: f64 = 1e-12;
const MAX_SURFACE_ITERATIONS: usize = 64;

/// Reference ellipsoid of revolution (oblate spheroid) centered at the origin of the cartesian frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EllipsoidDef", into = "EllipsoidDef")]
pub struct Ellipsoid {
    semimajor: f64,
    inv_flattening: f64,
}

#[derive(Serialize, Deserialize)]
struct EllipsoidDef {
    semimajor: f64,
    inv_flattening: f64,
}

impl Ellipsoid {
    /// WGS84 ellipsoid.
    pub const WGS84: Self = Ellipsoid {
        semimajor: 6_378_137.0,
        inv_flattening: 298.257223563,
    };

    /// Creates a new ellipsoid.
    ///
    /// Inverse flattening of `0` describes a sphere. Otherwise it must be greater than 1.
    pub fn new(semimajor: f64, inv_flattening: f64) -> Result<Self, GeoShapeError> {
        let valid_axis = semimajor.is_finite() && semimajor > 0.0;
        let valid_flattening =
            inv_flattening.is_finite() && (inv_flattening == 0.0 || inv_flattening > 1.0);

        if valid_axis && valid_flattening {
            Ok(Self {
                semimajor,
                inv_flattening,
            })
        } else {
            Err(GeoShapeError::InvalidEllipsoid {
                semimajor,
                inv_flattening,
            })
        }
    }

    /// Sphere with the given radius.
    pub fn sphere(radius: f64) -> Result<Self, GeoShapeError> {
        Self::new(radius, 0.0)
    }

    /// Equatorial radius.
    pub fn semimajor(&self) -> f64 {
        self.semimajor
    }

    /// Inverse flattening, `0` for a sphere.
    pub fn inv_flattening(&self) -> f64 {
        self.inv_flattening
    }

    /// Flattening `(a - b) / a`.
    pub fn flattening(&self) -> f64 {
        if self.inv_flattening == 0.0 {
            0.0
        } else {
            1.0 / self.inv_flattening
        }
    }

    /// Polar radius.
    pub fn semiminor(&self) -> f64 {
        self.semimajor * (1.0 - self.flattening())
    }

    /// Squared first eccentricity.
    pub fn eccentricity_sq(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    fn one_over_radii_sq(&self) -> Vector3<f64> {
        let a2 = self.semimajor * self.semimajor;
        let b = self.semiminor();
        Vector3::new(1.0 / a2, 1.0 / a2, 1.0 / (b * b))
    }

    /// Unit vector normal to the ellipsoid surface passing through `position`.
    pub fn geodetic_surface_normal(&self, position: &Position3) -> Vector3<f64> {
        let r = self.one_over_radii_sq();
        Vector3::new(
            position.x() * r.dx(),
            position.y() * r.dy(),
            position.z() * r.dz(),
        )
        .normalize()
    }

    /// Foot of the geodetic normal on the ellipsoid surface, i.e. the point of the surface with the same longitude
    /// and latitude as `position`.
    ///
    /// Returns `None` if the position is at the center of the ellipsoid. Points very close to the center are scaled
    /// along the geocentric direction instead.
    pub fn scale_to_geodetic_surface(&self, position: &Position3) -> Option<Position3> {
        let (px, py, pz) = (position.x(), position.y(), position.z());
        let a = self.semimajor;
        let b = self.semiminor();

        let x2 = px * px / (a * a);
        let y2 = py * py / (a * a);
        let z2 = pz * pz / (b * b);

        let squared_norm = x2 + y2 + z2;
        let ratio = (1.0 / squared_norm).sqrt();

        let intersection = Position3::from_vector(position.to_vector() * ratio);
        if squared_norm < CENTER_TOLERANCE_SQ {
            return ratio.is_finite().then_some(intersection);
        }

        let r = self.one_over_radii_sq();
        let gradient = Vector3::new(
            intersection.x() * r.dx() * 2.0,
            intersection.y() * r.dy() * 2.0,
            intersection.z() * r.dz() * 2.0,
        );

        let mut lambda = (1.0 - ratio) * position.to_vector().magnitude() / (0.5 * gradient.magnitude());
        let mut correction = 0.0;

        let mut x_mul = 1.0;
        let mut y_mul = 1.0;
        let mut z_mul = 1.0;

        for _ in 0..MAX_SURFACE_ITERATIONS {
            lambda -= correction;

            x_mul = 1.0 / (1.0 + lambda * r.dx());
            y_mul = 1.0 / (1.0 + lambda * r.dy());
            z_mul = 1.0 / (1.0 + lambda * r.dz());

            let x_mul2 = x_mul * x_mul;
            let y_mul2 = y_mul * y_mul;
            let z_mul2 = z_mul * z_mul;

            let func = x2 * x_mul2 + y2 * y_mul2 + z2 * z_mul2 - 1.0;
            if func.is_nan() || func.abs() <= SURFACE_EPSILON {
                break;
            }

            let denominator = x2 * x_mul2 * x_mul * r.dx()
                + y2 * y_mul2 * y_mul * r.dy()
                + z2 * z_mul2 * z_mul * r.dz();
            let derivative = -2.0 * denominator;
            correction = func / derivative;
        }

        Some(Position3::new(px * x_mul, py * y_mul, pz * z_mul))
    }

    /// Converts geodetic coordinates into a cartesian position.
    pub fn to_cartesian(&self, point: &GeodeticPoint) -> Position3 {
        let (sin_lat, cos_lat) = point.lat_rad().sin_cos();
        let (sin_lon, cos_lon) = point.lon_rad().sin_cos();
        let e2 = self.eccentricity_sq();

        let n = self.semimajor / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        let h = point.height();

        Position3::new(
            (n + h) * cos_lat * cos_lon,
            (n + h) * cos_lat * sin_lon,
            (n * (1.0 - e2) + h) * sin_lat,
        )
    }

    /// Converts a cartesian position into geodetic coordinates.
    ///
    /// Returns `None` for the center of the ellipsoid, which has no defined longitude and latitude.
    pub fn to_geodetic(&self, position: &Position3) -> Option<GeodeticPoint> {
        let surface = self.scale_to_geodetic_surface(position)?;
        let normal = self.geodetic_surface_normal(&surface);
        let h = *position - surface;

        let lon = normal.dy().atan2(normal.dx());
        let lat = normal.dz().asin();
        let height = h.dot(&position.to_vector()).signum() * h.magnitude();

        Some(GeodeticPoint::from_radians(lon, lat, height))
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

impl TryFrom<EllipsoidDef> for Ellipsoid {
    type Error = GeoShapeError;

    fn try_from(value: EllipsoidDef) -> Result<Self, Self::Error> {
        Self::new(value.semimajor, value.inv_flattening)
    }
}

impl From<Ellipsoid> for EllipsoidDef {
    fn from(value: Ellipsoid) -> Self {
        Self {
            semimajor: value.semimajor,
            inv_flattening: value.inv_flattening,
        }
    }
}
