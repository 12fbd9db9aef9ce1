//! Heights, distances and interpolation over sets of positions.
//!
//! Height related operations need the reference ellipsoid and are methods of [`Statistics`]. Purely cartesian
//! operations are free functions.

use std::borrow::Cow;

use geoshape_types::cartesian::CartesianPoint3d;
use geoshape_types::geo::Ellipsoid;
use geoshape_types::Position3;

/// Height statistics and height adjustment of positions relative to a reference ellipsoid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    ellipsoid: Ellipsoid,
}

impl Statistics {
    /// Creates a new instance for the given ellipsoid.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }

    /// Reference ellipsoid.
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    /// Height of the position above the ellipsoid. NaN for the ellipsoid center.
    pub fn height(&self, position: &Position3) -> f64 {
        self.ellipsoid
            .to_geodetic(position)
            .map_or(f64::NAN, |geodetic| geodetic.height())
    }

    /// Largest height among the positions, rounded to centimeters. Returns `default` if there are no positions.
    pub fn max_height(&self, positions: &[Position3], default: f64) -> f64 {
        positions
            .iter()
            .map(|p| self.height(p))
            .reduce(f64::max)
            .map_or(default, round_to_cm)
    }

    /// Smallest height among the positions, rounded to centimeters. Returns `default` if there are no positions.
    pub fn min_height(&self, positions: &[Position3], default: f64) -> f64 {
        positions
            .iter()
            .map(|p| self.height(p))
            .reduce(f64::min)
            .map_or(default, round_to_cm)
    }

    /// Mean height of the positions, rounded to centimeters. `0` if there are no positions.
    pub fn average_height(&self, positions: &[Position3]) -> f64 {
        if positions.is_empty() {
            return 0.0;
        }

        let sum: f64 = positions.iter().map(|p| self.height(p)).sum();
        round_to_cm(sum / positions.len() as f64)
    }

    /// Moves the position up by `delta` meters (down for negative values) along the ellipsoid normal.
    ///
    /// NaN `delta` is treated as 0. The ellipsoid center has no normal and is returned unchanged.
    pub fn add_height(&self, position: &Position3, delta: f64) -> Position3 {
        let delta = if delta.is_nan() { 0.0 } else { delta };
        if delta == 0.0 {
            return *position;
        }

        match self.ellipsoid.to_geodetic(position) {
            Some(geodetic) => self
                .ellipsoid
                .to_cartesian(&geodetic.with_height(geodetic.height() + delta)),
            None => {
                log::debug!("Cannot change height of the ellipsoid center");
                *position
            }
        }
    }

    /// Moves all the positions up by `delta` meters, see [`Statistics::add_height`].
    ///
    /// If `delta` is 0 or NaN, the input slice is returned borrowed.
    pub fn add_height_all<'a>(&self, positions: &'a [Position3], delta: f64) -> Cow<'a, [Position3]> {
        if delta == 0.0 || delta.is_nan() {
            return Cow::Borrowed(positions);
        }

        Cow::Owned(positions.iter().map(|p| self.add_height(p, delta)).collect())
    }

    /// Position with the same longitude and latitude at the given height.
    ///
    /// The ellipsoid center is returned unchanged.
    pub fn set_height(&self, position: &Position3, height: f64) -> Position3 {
        match self.ellipsoid.to_geodetic(position) {
            Some(geodetic) => self.ellipsoid.to_cartesian(&geodetic.with_height(height)),
            None => {
                log::debug!("Cannot change height of the ellipsoid center");
                *position
            }
        }
    }

    /// Moves all the positions to the given height, see [`Statistics::set_height`].
    pub fn set_height_all(&self, positions: &[Position3], height: f64) -> Vec<Position3> {
        positions.iter().map(|p| self.set_height(p, height)).collect()
    }
}

fn round_to_cm(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Straight line distance between two positions.
pub fn distance(a: &Position3, b: &Position3) -> f64 {
    a.distance(b)
}

/// Length of the polyline. `0` for fewer than 2 positions.
pub fn total_distance(positions: &[Position3]) -> f64 {
    positions.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Arithmetic mean of the positions, `None` if there are none.
pub fn centroid(positions: &[Position3]) -> Option<Position3> {
    match positions {
        [] => None,
        [single] => Some(*single),
        _ => {
            let n = positions.len() as f64;
            let (x, y, z) = positions.iter().fold((0.0, 0.0, 0.0), |(x, y, z), p| {
                (x + p.x(), y + p.y(), z + p.z())
            });
            Some(Position3::new(x / n, y / n, z / n))
        }
    }
}

/// Point in the middle of the straight segment between the positions.
pub fn midpoint(a: &Position3, b: &Position3) -> Position3 {
    a.midpoint(b)
}

/// Linear interpolation: `a` for `t = 0`, `b` for `t = 1`.
pub fn lerp(a: &Position3, b: &Position3, t: f64) -> Position3 {
    let s = 1.0 - t;
    Position3::new(
        a.x() * s + b.x() * t,
        a.y() * s + b.y() * t,
        a.z() * s + b.z() * t,
    )
}

/// `count` evenly spaced points between `a` and `b`, together with `a` and `b` themselves.
pub fn interpolate(a: &Position3, b: &Position3, count: usize) -> Vec<Position3> {
    let steps = (count + 1) as f64;
    (0..=count + 1)
        .map(|i| lerp(a, b, i as f64 / steps))
        .collect()
}

/// Inserts `count` evenly spaced points into every segment of the polyline.
pub fn interpolate_path(positions: &[Position3], count: usize) -> Vec<Position3> {
    let mut result = Vec::with_capacity(positions.len() + positions.len().saturating_sub(1) * count);
    result.extend(positions.first());

    for segment in positions.windows(2) {
        result.extend(interpolate(&segment[0], &segment[1], count).into_iter().skip(1));
    }

    result
}

/// Foot of the perpendicular dropped from `point` onto the infinite line through `start` and `end`.
pub fn perpendicular_foot(point: &Position3, start: &Position3, end: &Position3) -> Position3 {
    let direction = *end - *start;
    let t = (*point - *start).dot(&direction) / direction.magnitude_sq();
    *start + direction * t
}

/// Distance from `point` to the infinite line through `start` and `end`.
pub fn point_to_line_distance(point: &Position3, start: &Position3, end: &Position3) -> f64 {
    point.distance(&perpendicular_foot(point, start, end))
}
