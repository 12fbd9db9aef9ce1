//! Geometries in geographic coordinates (longitude, latitude and height) (see [`GeoPoint`]), reference ellipsoids
//! (see [`Ellipsoid`]) and conversion between geographic and planar coordinates (see [`Projection`]).

mod ellipsoid;
pub mod impls;
mod traits;

pub use ellipsoid::Ellipsoid;
pub use traits::point::{GeoPoint, NewGeoPoint};
pub use traits::projection::Projection;
