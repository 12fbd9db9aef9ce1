//! Shapes composed from a few control points.
//!
//! Every shape is available in two flavours:
//!
//! * a composer struct ([`IsoscelesTriangle`], [`Lune`], [`RegularPolygon`], [`OffsetLine`]) with a typed `compute`
//!   method taking exactly the points it needs,
//! * a slice based function (e.g. [`lune_positions`]) taking an arbitrary slice of positions. If the slice has fewer
//!   points than the shape needs, the slice itself is returned as [`Cow::Borrowed`] without any copying. Extra points
//!   beyond the needed ones are ignored.

use std::borrow::Cow;

use geoshape_types::Position3;

mod lune;
mod offset;
mod regular;
mod triangle;

pub use lune::{Lune, DEFAULT_LUNE_SEGMENTS};
pub use offset::OffsetLine;
pub use regular::{RegularPolygon, DEFAULT_POLYGON_SIDES, MIN_POLYGON_SIDES};
pub use triangle::IsoscelesTriangle;

/// Isosceles triangle over the first two positions, see [`IsoscelesTriangle::compute`]. Needs 3 positions.
pub fn isosceles_triangle_positions(positions: &[Position3]) -> Cow<'_, [Position3]> {
    IsoscelesTriangle::default().positions(positions)
}

/// Lune through the first three positions, see [`Lune::compute`]. Needs 3 positions.
pub fn lune_positions(positions: &[Position3], segments: usize) -> Cow<'_, [Position3]> {
    Lune::default().with_segments(segments).positions(positions)
}

/// Regular polygon with the center at the first position and a vertex at the second one, see
/// [`RegularPolygon::compute`]. Needs 2 positions.
pub fn regular_polygon_positions(positions: &[Position3], sides: usize) -> Cow<'_, [Position3]> {
    RegularPolygon::default().positions(positions, sides)
}

/// Polyline offset sideways by `offset_km`, see [`OffsetLine::compute`]. Needs 2 positions.
pub fn offset_line_positions(positions: &[Position3], offset_km: f64) -> Cow<'_, [Position3]> {
    OffsetLine.positions(positions, offset_km)
}

/// Returns the first `N` positions, or `None` if there are not enough of them.
fn leading<'a, const N: usize>(positions: &'a [Position3], shape: &str) -> Option<&'a [Position3; N]> {
    let leading = positions.first_chunk::<N>();
    if leading.is_none() {
        log::debug!(
            "{shape} needs {N} positions, but {} were given. Returning input unchanged",
            positions.len()
        );
    }

    leading
}

#[cfg(test)]
mod tests {
    use super::*;
    use geoshape_types::geo::impls::GeodeticPoint;
    use geoshape_types::geo::Ellipsoid;

    fn positions(count: usize) -> Vec<Position3> {
        (0..count)
            .map(|i| {
                Ellipsoid::WGS84.to_cartesian(&GeodeticPoint::from_degrees(
                    10.0 + 0.01 * i as f64,
                    50.0 + 0.003 * (i * i) as f64,
                    0.0,
                ))
            })
            .collect()
    }

    #[test]
    fn insufficient_input_is_borrowed() {
        let two = positions(2);
        let one = positions(1);
        let empty: Vec<Position3> = vec![];

        for result in [
            isosceles_triangle_positions(&two),
            lune_positions(&two, 10),
            regular_polygon_positions(&one, 6),
            offset_line_positions(&one, 1.0),
        ] {
            assert!(matches!(result, Cow::Borrowed(_)));
        }

        let result = lune_positions(&two, 10);
        assert!(std::ptr::eq(result.as_ref(), two.as_slice()));

        let result = regular_polygon_positions(&empty, 6);
        assert!(result.is_empty());
        assert!(std::ptr::eq(result.as_ref(), empty.as_slice()));
    }

    #[test]
    fn sufficient_input_is_owned() {
        let three = positions(3);

        assert_eq!(isosceles_triangle_positions(&three).len(), 3);
        assert_eq!(lune_positions(&three, 10).len(), 12);
        assert_eq!(regular_polygon_positions(&three, 5).len(), 5);
        assert_eq!(offset_line_positions(&three, 1.0).len(), 3);
        assert!(matches!(lune_positions(&three, 10), Cow::Owned(_)));
    }

    #[test]
    fn extra_positions_are_ignored() {
        let four = positions(4);
        assert_eq!(
            isosceles_triangle_positions(&four),
            isosceles_triangle_positions(&four[..3])
        );
        assert_eq!(lune_positions(&four, 20), lune_positions(&four[..3], 20));
    }
}
