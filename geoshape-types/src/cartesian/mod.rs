//! Types and functions on geometries in cartesian coordinates.

mod impls;
mod orient;
mod traits;

pub use impls::{Point2, Point3, Vector2, Vector3};
pub use orient::Orientation;
pub use traits::*;
