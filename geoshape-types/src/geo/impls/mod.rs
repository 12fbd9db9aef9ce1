//! Geographic point type and projections.

mod point;
pub mod projection;

pub use point::GeodeticPoint;
