//! Local tangent frames and rotations about points of the reference ellipsoid.
//!
//! A [`LocalFrame`] is an east-north-up (ENU) basis attached to a point. It is used to express offsets relative to a
//! point and its heading. [`ReferenceFrame`] bundles the operations that need an ellipsoid: building frames, rotating
//! a point about a center and placing a rotated offset relative to a position.

use std::str::FromStr;

use geoshape_types::cartesian::{CartesianPoint3d, Vector3};
use geoshape_types::geo::impls::GeodeticPoint;
use geoshape_types::geo::{Ellipsoid, GeoPoint};
use geoshape_types::{GeoShapeError, Position3};
use nalgebra::{Matrix4, Rotation3, Unit, UnitQuaternion};
use serde::{Deserialize, Serialize};

/// Axis of a local frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// East.
    X,
    /// North.
    Y,
    /// Up.
    Z,
}

impl Axis {
    fn unit(self) -> Unit<nalgebra::Vector3<f64>> {
        match self {
            Axis::X => nalgebra::Vector3::x_axis(),
            Axis::Y => nalgebra::Vector3::y_axis(),
            Axis::Z => nalgebra::Vector3::z_axis(),
        }
    }
}

impl FromStr for Axis {
    type Err = GeoShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(GeoShapeError::UnknownAxis(s.to_string())),
        }
    }
}

/// East-north-up basis attached to a point.
///
/// The basis vectors are mutually orthogonal unit vectors, `east x north = up`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    origin: Position3,
    east: Vector3<f64>,
    north: Vector3<f64>,
    up: Vector3<f64>,
}

impl LocalFrame {
    /// Tangent frame at the given geodetic point. The up vector is the ellipsoid normal.
    pub fn from_geodetic(origin: &GeodeticPoint, ellipsoid: &Ellipsoid) -> Self {
        Self::with_origin(ellipsoid.to_cartesian(origin), origin)
    }

    /// Tangent frame at a cartesian position.
    ///
    /// The ellipsoid center has no tangent plane. For it the frame falls back to the axes of the fixed frame.
    pub fn at_position(origin: &Position3, ellipsoid: &Ellipsoid) -> Self {
        match ellipsoid.to_geodetic(origin) {
            Some(geodetic) => Self::with_origin(*origin, &geodetic),
            None => {
                log::debug!("No tangent plane at {origin:?}, using fixed frame axes");
                Self {
                    origin: *origin,
                    east: Vector3::new(1.0, 0.0, 0.0),
                    north: Vector3::new(0.0, 1.0, 0.0),
                    up: Vector3::new(0.0, 0.0, 1.0),
                }
            }
        }
    }

    fn with_origin(origin: Position3, geodetic: &GeodeticPoint) -> Self {
        let (sin_lat, cos_lat) = geodetic.lat_rad().sin_cos();
        let (sin_lon, cos_lon) = geodetic.lon_rad().sin_cos();

        Self {
            origin,
            east: Vector3::new(-sin_lon, cos_lon, 0.0),
            north: Vector3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat),
            up: Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat),
        }
    }

    /// Origin of the frame.
    pub fn origin(&self) -> Position3 {
        self.origin
    }

    /// Unit vector pointing east.
    pub fn east(&self) -> Vector3<f64> {
        self.east
    }

    /// Unit vector pointing north.
    pub fn north(&self) -> Vector3<f64> {
        self.north
    }

    /// Unit vector pointing up, away from the ellipsoid.
    pub fn up(&self) -> Vector3<f64> {
        self.up
    }

    /// Converts an offset expressed in the local frame (x east, y north, z up) into a position in the fixed frame.
    pub fn local_to_world(&self, offset: &Vector3<f64>) -> Position3 {
        self.origin + self.east * offset.dx() + self.north * offset.dy() + self.up * offset.dz()
    }

    /// Converts a position in the fixed frame into an offset in the local frame.
    pub fn world_to_local(&self, position: &Position3) -> Vector3<f64> {
        let d = *position - self.origin;
        Vector3::new(d.dot(&self.east), d.dot(&self.north), d.dot(&self.up))
    }

    /// Affine transformation matrix from the local frame into the fixed frame.
    #[rustfmt::skip]
    pub fn to_fixed_frame_matrix(&self) -> Matrix4<f64> {
        let (e, n, u, o) = (self.east, self.north, self.up, self.origin);
        Matrix4::new(
            e.dx(), n.dx(), u.dx(), o.x(),
            e.dy(), n.dy(), u.dy(), o.y(),
            e.dz(), n.dz(), u.dz(), o.z(),
            0.0, 0.0, 0.0, 1.0,
        )
    }
}

/// Rotations and local frames on a reference ellipsoid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReferenceFrame {
    ellipsoid: Ellipsoid,
}

impl ReferenceFrame {
    /// Creates a new instance for the given ellipsoid.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    /// Reference ellipsoid.
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// East-north-up frame at the given geodetic point.
    pub fn tangent_frame(&self, origin: &GeodeticPoint) -> LocalFrame {
        LocalFrame::from_geodetic(origin, &self.ellipsoid)
    }

    /// Axis used to rotate points around `center`: the ellipsoid normal at the point of the surface right below (or
    /// above) `center`. For centers above the surface it points from that surface point to `center`.
    pub fn rotation_axis(&self, center: &Position3) -> Vector3<f64> {
        match self.ellipsoid.scale_to_geodetic_surface(center) {
            Some(surface) => self.ellipsoid.geodetic_surface_normal(&surface),
            None => {
                log::debug!("Rotation center {center:?} is at the ellipsoid center, axis is undefined");
                Vector3::new(f64::NAN, f64::NAN, f64::NAN)
            }
        }
    }

    /// Rotates `point` about the axis going through `center` (see [`ReferenceFrame::rotation_axis`]) by
    /// `angle_degrees`. Positive angles turn counterclockwise when looking down at the surface, i.e. from east
    /// towards north.
    ///
    /// The distance between the point and the center is preserved.
    pub fn rotate_about_center(
        &self,
        center: &Position3,
        point: &Position3,
        angle_degrees: f64,
    ) -> Position3 {
        let mut result = *point;
        self.rotate_into(&mut result, center, point, angle_degrees);
        result
    }

    /// Same as [`ReferenceFrame::rotate_about_center`], but writes the result into `dest`.
    pub fn rotate_into(
        &self,
        dest: &mut Position3,
        center: &Position3,
        point: &Position3,
        angle_degrees: f64,
    ) {
        let axis = Unit::new_normalize(nalgebra::Vector3::from(self.rotation_axis(center)));
        let rotation = UnitQuaternion::from_axis_angle(&axis, angle_degrees.to_radians());

        let relative = nalgebra::Vector3::from(*point - *center);
        *dest = *center + Vector3::from(rotation * relative);
    }

    /// Rotates `offset` about the `axis` of the local frame at `position` by `angle_degrees` and returns the
    /// position at the rotated offset from `position`.
    ///
    /// The offset is given in the local east-north-up frame: x to the east, y to the north and z up.
    pub fn translate_with_rotation(
        &self,
        position: &Position3,
        offset: &Vector3<f64>,
        angle_degrees: f64,
        axis: Axis,
    ) -> Position3 {
        let frame = LocalFrame::at_position(position, &self.ellipsoid);
        let rotation = Rotation3::from_axis_angle(&axis.unit(), angle_degrees.to_radians());
        let rotated = rotation * nalgebra::Vector3::from(*offset);

        frame.local_to_world(&Vector3::from(rotated))
    }
}
