use std::borrow::Cow;

use geoshape_types::geo::Ellipsoid;
use geoshape_types::Position3;

use super::leading;
use crate::frame::ReferenceFrame;

/// Smallest number of sides of a polygon. Smaller values are raised to it.
pub const MIN_POLYGON_SIDES: usize = 3;

/// Number of sides used when none is configured.
pub const DEFAULT_POLYGON_SIDES: usize = 6;

/// Regular polygon given by its center and one of its vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RegularPolygon {
    frame: ReferenceFrame,
}

impl RegularPolygon {
    /// Creates a new composer for the given ellipsoid.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            frame: ReferenceFrame::new(ellipsoid),
        }
    }

    /// Vertices of a regular polygon with `sides` sides (at least [`MIN_POLYGON_SIDES`]).
    ///
    /// The first vertex is `vertex` itself, the others follow counterclockwise (looking down at the surface), each
    /// rotated about the `center` by `360 / sides` degrees from the previous one. The ring is not closed.
    pub fn compute(&self, center: &Position3, vertex: &Position3, sides: usize) -> Vec<Position3> {
        let sides = sides.max(MIN_POLYGON_SIDES);
        let step = 360.0 / sides as f64;

        let vertices: Vec<_> = std::iter::once(*vertex)
            .chain((1..sides).map(|i| {
                self.frame
                    .rotate_about_center(center, vertex, step * i as f64)
            }))
            .collect();

        log::trace!("Composed regular polygon of {} vertices", vertices.len());
        vertices
    }

    /// Slice version of [`RegularPolygon::compute`]. The first position is the center, the second one is a vertex.
    pub fn positions<'a>(&self, positions: &'a [Position3], sides: usize) -> Cow<'a, [Position3]> {
        match leading::<2>(positions, "regular polygon") {
            Some([center, vertex]) => Cow::Owned(self.compute(center, vertex, sides)),
            None => Cow::Borrowed(positions),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use geoshape_types::cartesian::CartesianPoint3d;
    use geoshape_types::geo::impls::GeodeticPoint;

    use crate::frame::LocalFrame;

    fn position(lon: f64, lat: f64, height: f64) -> Position3 {
        Ellipsoid::WGS84.to_cartesian(&GeodeticPoint::from_degrees(lon, lat, height))
    }

    #[test]
    fn square_is_regular() {
        let center = position(24.94, 60.17, 20.0);
        let vertex = position(24.95, 60.17, 20.0);
        let square = RegularPolygon::default().compute(&center, &vertex, 4);

        assert_eq!(square.len(), 4);
        assert_eq!(square[0], vertex);

        let radius = center.distance(&vertex);
        let side = square[0].distance(&square[1]);
        for i in 0..4 {
            assert_relative_eq!(square[i].distance(&center), radius, max_relative = 1e-6);
            assert_relative_eq!(square[i].distance(&square[(i + 1) % 4]), side, max_relative = 1e-6);
        }
        assert_relative_eq!(side, radius * 2f64.sqrt(), max_relative = 1e-6);
    }

    #[test]
    fn polygons_with_different_number_of_sides() {
        let frame = ReferenceFrame::default();
        let stats = crate::stats::Statistics::default();
        let center = position(116.391, 39.907, 100.0);
        let vertex = position(116.392, 39.907, 100.0);
        let radius = center.distance(&vertex);
        let local = LocalFrame::at_position(&center, frame.ellipsoid());

        for sides in [3, 4, 5, 6, 8] {
            let polygon = RegularPolygon::default().compute(&center, &vertex, sides);

            assert_eq!(polygon.len(), sides);
            assert_eq!(polygon[0], vertex);

            let angles: Vec<f64> = polygon
                .iter()
                .map(|p| {
                    assert_relative_eq!(p.distance(&center), radius, max_relative = 1e-6);
                    assert_abs_diff_eq!(stats.height(p), 100.0, epsilon = 0.01);

                    let offset = local.world_to_local(p);
                    offset.dy().atan2(offset.dx()).to_degrees()
                })
                .collect();

            let expected = 360.0 / sides as f64;
            for i in 0..sides {
                let step = (angles[(i + 1) % sides] - angles[i]).rem_euclid(360.0);
                assert_abs_diff_eq!(step, expected, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn sides_are_clamped() {
        let center = position(0.0, 0.0, 0.0);
        let vertex = position(0.0, 0.01, 0.0);

        for sides in [0, 1, 2] {
            assert_eq!(
                RegularPolygon::default().compute(&center, &vertex, sides).len(),
                MIN_POLYGON_SIDES
            );
        }
    }

    #[test]
    fn vertices_go_counterclockwise() {
        let frame = ReferenceFrame::default();
        let local = frame.tangent_frame(&GeodeticPoint::from_degrees(45.0, 0.0, 0.0));
        let center = local.origin();
        let vertex = local.local_to_world(&geoshape_types::cartesian::Vector3::new(1000.0, 0.0, 0.0));

        let square = RegularPolygon::default().compute(&center, &vertex, 4);
        let second = local.world_to_local(&square[1]);
        assert!(second.dy() > 999.0);
        assert!(second.dx().abs() < 1e-6);
    }
}
