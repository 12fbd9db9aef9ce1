//! Value types used by the `geoshape` algorithms.
//!
//! The crate is split into two halves:
//!
//! * [`cartesian`] - points and vectors in 2d and 3d cartesian space, orientation of point triplets and winding of
//!   rings. Earth-centered, earth-fixed positions are represented as [`Position3`], projected points as
//!   [`PlanarPoint`].
//! * [`geo`] - geodetic coordinates ([`GeodeticPoint`](geo::impls::GeodeticPoint)), reference ellipsoids
//!   ([`Ellipsoid`](geo::Ellipsoid)) and projections between geodetic and planar coordinates
//!   ([`Projection`](geo::Projection)).
//!
//! ```
//! use geoshape_types::geo::impls::GeodeticPoint;
//! use geoshape_types::geo::Ellipsoid;
//!
//! let beijing = GeodeticPoint::from_degrees(116.391, 39.907, 100.0);
//! let position = Ellipsoid::WGS84.to_cartesian(&beijing);
//! let back = Ellipsoid::WGS84.to_geodetic(&position).expect("not at the ellipsoid center");
//! assert!((back.height() - 100.0).abs() < 1e-6);
//! ```

pub mod cartesian;
mod error;
pub mod geo;

pub use error::GeoShapeError;

/// Point in the earth-centered, earth-fixed cartesian frame of a reference ellipsoid, in meters.
pub type Position3 = cartesian::Point3<f64>;

/// Point on a projected plane. Only comparable with other points produced by the same projection.
pub type PlanarPoint = cartesian::Point2<f64>;
