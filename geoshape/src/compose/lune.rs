use std::borrow::Cow;

use geoshape_types::cartesian::Orientation;
use geoshape_types::geo::impls::projection::PlanarProjector;
use geoshape_types::geo::Ellipsoid;
use geoshape_types::Position3;

use super::leading;
use crate::arc::{close_ring, Arc};
use crate::circle::Circle;

/// Number of arc segments used by [`Lune::default`].
pub const DEFAULT_LUNE_SEGMENTS: usize = 100;

/// Closed shape bounded by the circular arc passing through three points and the chord between the first two of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lune {
    ellipsoid: Ellipsoid,
    segments: usize,
}

impl Default for Lune {
    fn default() -> Self {
        Self::new(Ellipsoid::WGS84)
    }
}

impl Lune {
    /// Creates a new composer for the given ellipsoid with [`DEFAULT_LUNE_SEGMENTS`] arc segments.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            segments: DEFAULT_LUNE_SEGMENTS,
        }
    }

    /// Sets the number of segments the arc is approximated with. Zero is treated as 1.
    pub fn with_segments(self, segments: usize) -> Self {
        Self { segments, ..self }
    }

    /// Number of arc segments.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Builds the lune with the chord `(p1, p2)` and the arc going from `p1` to `p2` (or back) through `p3`.
    ///
    /// The computation is done on the Web Mercator plane. All the resulting points are placed at the height of
    /// `p1`. The ring is closed and contains `segments + 2` points.
    ///
    /// The points must be pairwise distinct and not collinear, otherwise the result consists of non-finite values.
    pub fn compute(&self, p1: &Position3, p2: &Position3, p3: &Position3) -> Vec<Position3> {
        let height = self
            .ellipsoid
            .to_geodetic(p1)
            .map_or(f64::NAN, |geodetic| geodetic.height());
        let projector = PlanarProjector::new(self.ellipsoid).with_height(height);

        let [a, b, c] = [p1, p2, p3].map(|p| projector.forward(p));
        let circle = Circle::through(&a, &b, &c);

        // The arc is always built counterclockwise, so its ends are ordered for it to pass through `c`.
        let (start, end) = match Orientation::triplet(&a, &b, &c) {
            Orientation::Counterclockwise => (circle.angle_of(&b), circle.angle_of(&a)),
            _ => (circle.angle_of(&a), circle.angle_of(&b)),
        };

        let arc = Arc::new(circle, start, end, self.segments);
        let ring = close_ring(arc.points().map(|p| projector.inverse(&p)).collect());

        log::trace!("Composed lune of {} points", ring.len());
        ring
    }

    /// Slice version of [`Lune::compute`] using the first 3 positions.
    pub fn positions<'a>(&self, positions: &'a [Position3]) -> Cow<'a, [Position3]> {
        match leading::<3>(positions, "lune") {
            Some([p1, p2, p3]) => Cow::Owned(self.compute(p1, p2, p3)),
            None => Cow::Borrowed(positions),
        }
    }
}
