//! Implementations of the projections between geodetic, cartesian and planar coordinates.
mod planar;
mod web_mercator;

pub use planar::PlanarProjector;
pub use web_mercator::{WebMercator, MAX_LATITUDE};
