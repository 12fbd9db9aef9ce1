//! Tessellation of circular arcs.

use std::f64::consts::TAU;
use std::iter::FusedIterator;

use geoshape_types::PlanarPoint;

use crate::circle::Circle;

/// Arc of a circle going counterclockwise from the start angle to the end angle.
///
/// Angles are in radians, measured counterclockwise from the positive x axis. To get a clockwise arc, swap start and
/// end angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    circle: Circle,
    start_angle: f64,
    end_angle: f64,
    segments: usize,
}

impl Arc {
    /// Creates a new arc, approximated by `segments` straight segments. Zero segments count is treated as 1.
    pub fn new(circle: Circle, start_angle: f64, end_angle: f64, segments: usize) -> Self {
        Self {
            circle,
            start_angle,
            end_angle,
            segments: segments.max(1),
        }
    }

    /// Circle the arc belongs to.
    pub fn circle(&self) -> &Circle {
        &self.circle
    }

    /// Number of segments the arc is approximated with.
    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Angle the arc spans, in `[0, 2 * pi)`.
    pub fn sweep(&self) -> f64 {
        (self.end_angle - self.start_angle).rem_euclid(TAU)
    }

    /// Points of the arc: `segments + 1` points at equal angular steps, starting at the start angle and ending at the
    /// end angle.
    pub fn points(&self) -> ArcPoints {
        ArcPoints {
            circle: self.circle,
            start_angle: self.start_angle,
            step: self.sweep() / self.segments as f64,
            next: 0,
            count: self.segments + 1,
        }
    }
}

/// Iterator over points of an [`Arc`].
#[derive(Debug, Clone)]
pub struct ArcPoints {
    circle: Circle,
    start_angle: f64,
    step: f64,
    next: usize,
    count: usize,
}

impl Iterator for ArcPoints {
    type Item = PlanarPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }

        let angle = self.start_angle + self.step * self.next as f64;
        self.next += 1;
        Some(self.circle.point_at(angle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for ArcPoints {}
impl FusedIterator for ArcPoints {}

/// Closes the ring by appending a copy of its first point. Empty input is returned as is.
pub fn close_ring<P: Clone>(mut points: Vec<P>) -> Vec<P> {
    if let Some(first) = points.first().cloned() {
        points.push(first);
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use geoshape_types::cartesian::CartesianPoint2d;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn unit_circle() -> Circle {
        Circle::new(PlanarPoint::new(0.0, 0.0), 1.0)
    }

    #[test]
    fn quarter_arc() {
        let arc = Arc::new(unit_circle(), 0.0, FRAC_PI_2, 2);
        let points: Vec<_> = arc.points().collect();

        assert_eq!(points.len(), 3);
        assert_abs_diff_eq!(points[0], PlanarPoint::new(1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            points[1],
            PlanarPoint::new(0.5f64.sqrt(), 0.5f64.sqrt()),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(points[2], PlanarPoint::new(0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn sweep_is_counterclockwise() {
        let arc = Arc::new(unit_circle(), FRAC_PI_2, 0.0, 4);
        assert_abs_diff_eq!(arc.sweep(), 3.0 * FRAC_PI_2, epsilon = 1e-12);

        let points: Vec<_> = arc.points().collect();
        assert_abs_diff_eq!(points[2], PlanarPoint::new(-0.5f64.sqrt(), -0.5f64.sqrt()), epsilon = 1e-12);
        assert_abs_diff_eq!(points[4], PlanarPoint::new(1.0, 0.0), epsilon = 1e-12);

        let across_pi = Arc::new(unit_circle(), 3.0, -3.0, 1);
        assert_abs_diff_eq!(across_pi.sweep(), TAU - 6.0, epsilon = 1e-12);
    }

    #[test]
    fn points_are_on_circle() {
        let circle = Circle::new(PlanarPoint::new(100.0, -50.0), 25.0);
        let arc = Arc::new(circle, -PI, 2.0, 37);

        for p in arc.points() {
            assert_abs_diff_eq!(p.distance(&circle.center()), 25.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn iterator_is_exact_and_restartable() {
        let arc = Arc::new(unit_circle(), 0.0, PI, 10);
        let mut points = arc.points();
        assert_eq!(points.len(), 11);

        points.next();
        let copy = points.clone();
        assert_eq!(points.len(), 10);
        assert_eq!(copy.collect::<Vec<_>>(), points.collect::<Vec<_>>());
    }

    #[test]
    fn more_segments_give_denser_points() {
        let circle = Circle::new(PlanarPoint::new(500.0, 200.0), 40.0);
        let mut previous: Option<(usize, f64)> = None;

        for segments in [1, 2, 5, 10, 50] {
            let points: Vec<_> = Arc::new(circle, -0.3, 2.5, segments).points().collect();
            let spacing = points
                .windows(2)
                .map(|w| w[0].distance(&w[1]))
                .fold(0.0, f64::max);

            assert_eq!(points.len(), segments + 1);
            if let Some((count, max_spacing)) = previous {
                assert!(points.len() > count);
                assert!(spacing < max_spacing);
            }
            previous = Some((points.len(), spacing));
        }
    }

    #[test]
    fn zero_segments() {
        let arc = Arc::new(unit_circle(), 0.0, PI, 0);
        assert_eq!(arc.segments(), 1);
        assert_eq!(arc.points().count(), 2);
    }

    #[test]
    fn closing_ring() {
        assert_eq!(close_ring(vec![1, 2, 3]), vec![1, 2, 3, 1]);
        assert_eq!(close_ring(Vec::<i32>::new()), Vec::<i32>::new());
        assert_eq!(close_ring(vec![7]), vec![7, 7]);
    }
}
