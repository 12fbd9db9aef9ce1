mod cartesian_point;
mod ring;

pub use cartesian_point::{
    CartesianPoint2d, CartesianPoint3d, NewCartesianPoint2d, NewCartesianPoint3d,
};

pub use ring::{CartesianRing, Winding};
