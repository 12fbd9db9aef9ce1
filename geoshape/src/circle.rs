//! Circles on the projected plane.

use geoshape_types::cartesian::CartesianPoint2d;
use geoshape_types::PlanarPoint;

/// Circle given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: PlanarPoint,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    pub fn new(center: PlanarPoint, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Circle passing through the three given points.
    ///
    /// The center is found as the intersection of the perpendicular bisectors of `(p1, p2)` and `(p1, p3)`.
    ///
    /// The points must be pairwise distinct and must not lie exactly on one line. Almost collinear points give a circle
    /// with a far away center and a huge radius. Exactly collinear or coincident points result in non-finite center
    /// and radius.
    pub fn through(p1: &PlanarPoint, p2: &PlanarPoint, p3: &PlanarPoint) -> Self {
        let (x1, y1) = (p1.x(), p1.y());
        let (x2, y2) = (p2.x(), p2.y());
        let (x3, y3) = (p3.x(), p3.y());

        let a1 = 2.0 * (x2 - x1);
        let b1 = 2.0 * (y2 - y1);
        let c1 = x2 * x2 + y2 * y2 - x1 * x1 - y1 * y1;

        let a2 = 2.0 * (x3 - x1);
        let b2 = 2.0 * (y3 - y1);
        let c2 = x3 * x3 + y3 * y3 - x1 * x1 - y1 * y1;

        let det = a1 * b2 - a2 * b1;
        let center = PlanarPoint::new((c1 * b2 - c2 * b1) / det, (a1 * c2 - a2 * c1) / det);
        let radius = center.distance(p1);

        Self { center, radius }
    }

    /// Center of the circle.
    pub fn center(&self) -> PlanarPoint {
        self.center
    }

    /// Radius of the circle.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Polar angle of the point relative to the center of the circle, in radians in `[-pi, pi]`.
    pub fn angle_of(&self, point: &PlanarPoint) -> f64 {
        (point.y() - self.center.y()).atan2(point.x() - self.center.x())
    }

    /// Point of the circle at the given polar angle in radians.
    pub fn point_at(&self, angle: f64) -> PlanarPoint {
        let (sin, cos) = angle.sin_cos();
        PlanarPoint::new(
            self.center.x() + self.radius * cos,
            self.center.y() + self.radius * sin,
        )
    }
}
