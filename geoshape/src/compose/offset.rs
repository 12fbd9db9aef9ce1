use std::borrow::Cow;

use geoshape_types::Position3;

/// Polyline moved sideways by a constant distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetLine;

impl OffsetLine {
    /// Offsets every segment of the polyline by `offset_km` kilometers.
    ///
    /// The offset direction of a segment `(a, b)` is `a x (b - a)`, which is perpendicular both to the segment and to
    /// the direction from the ellipsoid center to `a`. Positive offsets move the line to the left of the direction of
    /// travel, negative ones to the right. Both ends of every segment are moved by the segment's own direction, and the
    /// moved end of one segment replaces the moved start of the next one, so the result has as many points as the
    /// input.
    ///
    /// Polylines with fewer than two points are returned as is. A zero length segment has no direction and gives
    /// non-finite points.
    pub fn compute(&self, positions: &[Position3], offset_km: f64) -> Vec<Position3> {
        let distance = offset_km * 1000.0;
        let mut result = Vec::with_capacity(positions.len());

        for segment in positions.windows(2) {
            let (start, end) = (segment[0], segment[1]);
            let normal = start.to_vector().cross(&(end - start)).normalize();

            if result.is_empty() {
                result.push(start + normal * distance);
            }
            result.push(end + normal * distance);
        }

        if result.is_empty() {
            return positions.to_vec();
        }

        log::trace!("Composed offset line of {} points", result.len());
        result
    }

    /// Slice version of [`OffsetLine::compute`], returns the input borrowed if it has fewer than 2 points.
    pub fn positions<'a>(&self, positions: &'a [Position3], offset_km: f64) -> Cow<'a, [Position3]> {
        match super::leading::<2>(positions, "offset line") {
            Some(_) => Cow::Owned(self.compute(positions, offset_km)),
            None => Cow::Borrowed(positions),
        }
    }
}
