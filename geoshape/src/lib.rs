//! Geoshape derives renderable shapes from a handful of points picked on the surface of a reference ellipsoid.
//!
//! All positions are earth-centered, earth-fixed cartesian points ([`Position3`]) in meters. From two or three of
//! them the crate builds:
//!
//! * [`regular polygons`](compose::RegularPolygon) around a center point,
//! * [`isosceles triangles`](compose::IsoscelesTriangle) over a base segment,
//! * [`lunes`](compose::Lune), closed shapes bounded by the circular arc through three points,
//! * [`offset lines`](compose::OffsetLine), polylines moved sideways by a given distance.
//!
//! The building blocks are exposed as well: rotation about a point and local east-north-up frames
//! ([`frame`]), circles through three planar points ([`circle`]), arc tessellation ([`arc`]) and height and distance
//! statistics over sets of positions ([`stats`]).
//!
//! # Degenerate input
//!
//! Shape operations never fail. Slice based entry points such as [`compose::lune_positions`] return their input
//! unchanged when it has fewer points than the shape needs. Numeric degeneracies (collinear or coincident points,
//! NaN coordinates) propagate through the IEEE-754 arithmetic and are not reported as errors. The only fallible
//! operations are configuration related, see [`options`].
//!
//! ```
//! use geoshape::compose::RegularPolygon;
//! use geoshape::geoshape_types::geo::impls::GeodeticPoint;
//! use geoshape::geoshape_types::geo::Ellipsoid;
//!
//! let ellipsoid = Ellipsoid::WGS84;
//! let center = ellipsoid.to_cartesian(&GeodeticPoint::from_degrees(116.391, 39.907, 100.0));
//! let vertex = ellipsoid.to_cartesian(&GeodeticPoint::from_degrees(116.392, 39.907, 100.0));
//!
//! let hexagon = RegularPolygon::default().compute(&center, &vertex, 6);
//! assert_eq!(hexagon.len(), 6);
//! assert_eq!(hexagon[0], vertex);
//! ```

pub mod arc;
pub mod circle;
pub mod compose;
pub mod frame;
pub mod options;
pub mod stats;

pub use frame::{Axis, LocalFrame, ReferenceFrame};
pub use geoshape_types::{PlanarPoint, Position3};
pub use options::{OptionsError, ShapeOptions};
pub use stats::Statistics;

// Reexport geoshape_types
pub use geoshape_types;
