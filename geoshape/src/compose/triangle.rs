use std::borrow::Cow;

use geoshape_types::geo::{Ellipsoid, GeoPoint};
use geoshape_types::Position3;

use super::leading;
use crate::frame::ReferenceFrame;

/// Isosceles triangle built over a base segment, with the apex direction given by a third point.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IsoscelesTriangle {
    frame: ReferenceFrame,
}

impl IsoscelesTriangle {
    /// Creates a new composer for the given ellipsoid.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            frame: ReferenceFrame::new(ellipsoid),
        }
    }

    /// Builds a triangle with the base `(p1, p2)` and the apex on the perpendicular bisector of the base.
    ///
    /// The apex is `p3` rotated about the midpoint of the base until it lies on the bisector, so its distance from the
    /// midpoint is the distance between `p3` and the midpoint. Returns `[p1, p2, apex]`.
    ///
    /// Directions are measured along rhumb lines, so the two legs are equal only approximately, within about 1% for
    /// shapes of a few kilometers.
    pub fn compute(&self, p1: &Position3, p2: &Position3, p3: &Position3) -> [Position3; 3] {
        let mid = p1.midpoint(p2);
        let angle = self.azimuth(&mid, p2) - self.azimuth(&mid, p3) - 90.0;
        let apex = self.frame.rotate_about_center(&mid, p3, angle);

        [*p1, *p2, apex]
    }

    /// Slice version of [`IsoscelesTriangle::compute`] using the first 3 positions.
    pub fn positions<'a>(&self, positions: &'a [Position3]) -> Cow<'a, [Position3]> {
        match leading::<3>(positions, "isosceles triangle") {
            Some([p1, p2, p3]) => Cow::Owned(self.compute(p1, p2, p3).to_vec()),
            None => Cow::Borrowed(positions),
        }
    }

    /// Direction from `from` to `to` in degrees, counterclockwise from east.
    fn azimuth(&self, from: &Position3, to: &Position3) -> f64 {
        let ellipsoid = self.frame.ellipsoid();
        match (ellipsoid.to_geodetic(from), ellipsoid.to_geodetic(to)) {
            (Some(from), Some(to)) => 90.0 - from.rhumb_bearing(&to),
            _ => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geoshape_types::cartesian::CartesianPoint3d;
    use geoshape_types::geo::impls::GeodeticPoint;

    fn position(lon: f64, lat: f64) -> Position3 {
        Ellipsoid::WGS84.to_cartesian(&GeodeticPoint::from_degrees(lon, lat, 0.0))
    }

    #[test]
    fn base_points_are_kept() {
        let p1 = position(116.39, 39.90);
        let p2 = position(116.40, 39.90);
        let p3 = position(116.395, 39.91);

        let [a, b, _] = IsoscelesTriangle::default().compute(&p1, &p2, &p3);
        assert_eq!(a, p1);
        assert_eq!(b, p2);
    }

    #[test]
    fn legs_are_equal() {
        let cases = [
            (position(116.39, 39.90), position(116.40, 39.90), position(116.41, 39.92)),
            (position(-0.13, 51.50), position(-0.12, 51.51), position(-0.14, 51.52)),
            (position(30.0, -10.0), position(30.02, -10.01), position(30.0, -10.03)),
        ];

        for (p1, p2, p3) in cases {
            let [_, _, apex] = IsoscelesTriangle::default().compute(&p1, &p2, &p3);
            assert_relative_eq!(apex.distance(&p1), apex.distance(&p2), max_relative = 0.02);

            let mid = p1.midpoint(&p2);
            assert_relative_eq!(apex.distance(&mid), p3.distance(&mid), max_relative = 1e-6);
        }
    }

    #[test]
    fn apex_on_bisector_stays_in_place() {
        let p1 = position(10.0, 0.0);
        let p2 = position(10.01, 0.0);

        // Apex to the south of an eastward base.
        let p3 = position(10.005, -0.01);
        let [_, _, apex] = IsoscelesTriangle::default().compute(&p1, &p2, &p3);
        assert!(apex.distance(&p3) < 1.0);
    }

    #[test]
    fn slice_entry_point() {
        let p = [position(1.0, 1.0), position(1.01, 1.0), position(1.0, 1.01)];
        let result = IsoscelesTriangle::default().positions(&p);
        assert_eq!(result.as_ref(), IsoscelesTriangle::default().compute(&p[0], &p[1], &p[2]));
    }
}
