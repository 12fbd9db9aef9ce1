use crate::cartesian::traits::cartesian_point::CartesianPoint2d;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

/// Sequence of points considered as a ring: the last point is implicitly connected to the first one.
///
/// A ring may or may not repeat the first point at the end, the result is the same in both cases.
pub trait CartesianRing {
    /// Type of the points of the ring.
    type Point: CartesianPoint2d;

    /// Signed area of the ring (shoelace formula). Positive for counterclockwise rings in a y-up coordinate system.
    fn area_signed(&self) -> <Self::Point as CartesianPoint2d>::Num;

    /// Winding of the ring. Degenerate rings with zero area are considered clockwise.
    fn winding(&self) -> Winding {
        if self.area_signed() <= <Self::Point as CartesianPoint2d>::Num::zero() {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }
}

impl<P: CartesianPoint2d> CartesianRing for [P] {
    type Point = P;

    fn area_signed(&self) -> P::Num {
        let Some(first) = self.first() else {
            return P::Num::zero();
        };

        let mut prev = first;
        let mut aggr = P::Num::zero();

        for p in self.iter().skip(1).chain(std::iter::once(first)) {
            aggr = aggr + prev.x() * p.y() - p.x() * prev.y();
            prev = p;
        }

        aggr / (P::Num::one() + P::Num::one())
    }
}

/// Direction in which the points of a ring are traversed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Winding {
    /// Clockwise.
    Clockwise,
    /// Counterclockwise.
    CounterClockwise,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlanarPoint;

    #[test]
    fn area() {
        let ring = [
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(0.0, 1.0),
            PlanarPoint::new(1.0, 0.0),
        ];
        assert_eq!(ring.area_signed(), -0.5);

        let ring = [
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(1.0, 0.0),
            PlanarPoint::new(0.0, 1.0),
        ];
        assert_eq!(ring.area_signed(), 0.5);
    }

    #[test]
    fn area_ignores_closing_point() {
        let open = [
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(2.0, 0.0),
            PlanarPoint::new(2.0, 2.0),
            PlanarPoint::new(0.0, 2.0),
        ];
        let mut closed = open.to_vec();
        closed.push(open[0]);

        assert_eq!(open.area_signed(), 4.0);
        assert_eq!(closed.area_signed(), 4.0);
    }

    #[test]
    fn winding() {
        let ring = [
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(0.0, 1.0),
            PlanarPoint::new(1.0, 0.0),
        ];
        assert_eq!(ring.winding(), Winding::Clockwise);

        let ring = [
            PlanarPoint::new(0.0, 0.0),
            PlanarPoint::new(1.0, 0.0),
            PlanarPoint::new(0.0, 1.0),
        ];
        assert_eq!(ring.winding(), Winding::CounterClockwise);

        let empty: [PlanarPoint; 0] = [];
        assert_eq!(empty.area_signed(), 0.0);
        assert_eq!(empty.winding(), Winding::Clockwise);
    }
}
