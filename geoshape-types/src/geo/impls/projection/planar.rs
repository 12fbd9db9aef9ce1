use super::web_mercator::WebMercator;
use crate::cartesian::CartesianPoint2d;
use crate::geo::ellipsoid::Ellipsoid;
use crate::geo::impls::GeodeticPoint;
use crate::geo::traits::projection::Projection;
use crate::{PlanarPoint, Position3};

/// Projection of cartesian positions onto the Web Mercator plane.
///
/// Circle fitting, orientation tests and arc tessellation are only defined on a plane, so algorithms that need them
/// project their input with this projector, do the planar math and unproject the result.
///
/// Height does not survive projection: unprojected points are placed at the projector's reference height (see
/// [`PlanarProjector::with_height`]). Round trip of a position at the reference height is lossless up to sub-millimeter
/// precision at mid latitudes. Metric accuracy is not preserved for shapes with very large extent or close to the
/// poles, see [`WebMercator`](super::WebMercator).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarProjector {
    ellipsoid: Ellipsoid,
    mercator: WebMercator<GeodeticPoint, PlanarPoint>,
    height: f64,
}

impl PlanarProjector {
    /// Creates a projector for the given ellipsoid with reference height of 0.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self {
            ellipsoid,
            mercator: WebMercator::new(ellipsoid),
            height: 0.0,
        }
    }

    /// Sets the height at which unprojected points are placed.
    pub fn with_height(self, height: f64) -> Self {
        Self { height, ..self }
    }

    /// Reference height of unprojected points.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Ellipsoid used for conversion between cartesian and geodetic coordinates.
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Projects the position onto the plane.
    ///
    /// Unlike [`Projection::project`] this never fails: non-finite input and the ellipsoid center produce NaN
    /// coordinates.
    pub fn forward(&self, position: &Position3) -> PlanarPoint {
        self.ellipsoid
            .to_geodetic(position)
            .and_then(|geodetic| self.mercator.project(&geodetic))
            .unwrap_or(PlanarPoint::new(f64::NAN, f64::NAN))
    }

    /// Unprojects a planar point to a position at the reference height. Non-finite input propagates into the output.
    pub fn inverse(&self, point: &PlanarPoint) -> Position3 {
        match self.mercator.unproject(point) {
            Some(geodetic) => self
                .ellipsoid
                .to_cartesian(&geodetic.with_height(self.height)),
            None => Position3::new(f64::NAN, f64::NAN, f64::NAN),
        }
    }
}

impl Default for PlanarProjector {
    fn default() -> Self {
        Self::new(Ellipsoid::WGS84)
    }
}

impl Projection for PlanarProjector {
    type InPoint = Position3;
    type OutPoint = PlanarPoint;

    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint> {
        let projected = self.forward(input);
        (projected.x().is_finite() && projected.y().is_finite()).then_some(projected)
    }

    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint> {
        let position = self.inverse(input);
        position
            .coords()
            .iter()
            .all(|c| c.is_finite())
            .then_some(position)
    }
}
