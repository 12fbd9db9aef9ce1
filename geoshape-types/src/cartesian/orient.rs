use crate::cartesian::CartesianPoint2d;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Orientation of a triplet of points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    /// Clockwise
    Clockwise,
    /// Counterclockwise
    Counterclockwise,
    /// Collinear
    Collinear,
}

impl Orientation {
    /// Determines orientation of a triplet of points in a y-up coordinate system.
    ///
    /// Triplets containing NaN coordinates are reported as collinear.
    pub fn triplet<Num: Float>(
        p: &impl CartesianPoint2d<Num = Num>,
        q: &impl CartesianPoint2d<Num = Num>,
        r: &impl CartesianPoint2d<Num = Num>,
    ) -> Self {
        match (q.y() - p.y()) * (r.x() - q.x()) - (q.x() - p.x()) * (r.y() - q.y()) {
            v if v > Num::zero() => Self::Clockwise,
            v if v < Num::zero() => Self::Counterclockwise,
            _ => Self::Collinear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanarPoint;

    #[test]
    fn triplet() {
        let a = PlanarPoint::new(-1.0, 0.0);
        let b = PlanarPoint::new(1.0, 0.0);

        assert_eq!(
            Orientation::triplet(&a, &b, &PlanarPoint::new(0.0, 1.0)),
            Orientation::Counterclockwise
        );
        assert_eq!(
            Orientation::triplet(&a, &b, &PlanarPoint::new(0.0, -1.0)),
            Orientation::Clockwise
        );
        assert_eq!(
            Orientation::triplet(&a, &b, &PlanarPoint::new(3.0, 0.0)),
            Orientation::Collinear
        );
        assert_eq!(
            Orientation::triplet(&a, &b, &PlanarPoint::new(f64::NAN, 0.0)),
            Orientation::Collinear
        );
    }
}
