//! Configuration of shape composition.

use std::borrow::Cow;

use geoshape_types::geo::Ellipsoid;
use geoshape_types::{GeoShapeError, Position3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compose::{
    IsoscelesTriangle, Lune, OffsetLine, RegularPolygon, DEFAULT_LUNE_SEGMENTS, DEFAULT_POLYGON_SIDES,
    MIN_POLYGON_SIDES,
};
use crate::frame::ReferenceFrame;
use crate::stats::Statistics;

/// Error in shape options.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptionsError {
    /// Ellipsoid parameters are not valid.
    #[error("invalid ellipsoid")]
    Ellipsoid(#[from] GeoShapeError),
    /// Lune must have at least one arc segment.
    #[error("lune arc must have at least one segment")]
    NoLuneSegments,
    /// Polygon must have at least 3 sides.
    #[error("polygon must have at least 3 sides, but {0} given")]
    TooFewPolygonSides(usize),
}

/// Settings shared by all the shape composers.
///
/// All the fields are optional when deserializing, missing ones take their default values.
///
/// ```
/// use geoshape::ShapeOptions;
///
/// let options: ShapeOptions = serde_json::from_str(r#"{"lune_segments": 32}"#).unwrap();
/// assert_eq!(options.lune_segments, 32);
/// assert_eq!(options.polygon_sides, 6);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeOptions {
    /// Reference ellipsoid. WGS84 by default.
    pub ellipsoid: Ellipsoid,
    /// Number of segments of the lune arc.
    pub lune_segments: usize,
    /// Number of sides of regular polygons.
    pub polygon_sides: usize,
}

impl Default for ShapeOptions {
    fn default() -> Self {
        Self {
            ellipsoid: Ellipsoid::WGS84,
            lune_segments: DEFAULT_LUNE_SEGMENTS,
            polygon_sides: DEFAULT_POLYGON_SIDES,
        }
    }
}

impl ShapeOptions {
    /// Default options with a custom ellipsoid.
    pub fn with_ellipsoid_params(semimajor: f64, inv_flattening: f64) -> Result<Self, OptionsError> {
        Ok(Self {
            ellipsoid: Ellipsoid::new(semimajor, inv_flattening)?,
            ..Default::default()
        })
    }

    /// Checks that the options can be used without silent adjustments.
    ///
    /// Composers accept any values (zero segments is treated as one, fewer than 3 sides as 3), but options coming from
    /// the user should be checked with this method.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.lune_segments == 0 {
            return Err(OptionsError::NoLuneSegments);
        }

        if self.polygon_sides < MIN_POLYGON_SIDES {
            return Err(OptionsError::TooFewPolygonSides(self.polygon_sides));
        }

        Ok(())
    }

    /// Reference frame for the configured ellipsoid.
    pub fn frame(&self) -> ReferenceFrame {
        ReferenceFrame::new(self.ellipsoid)
    }

    /// Isosceles triangle composer.
    pub fn isosceles_triangle(&self) -> IsoscelesTriangle {
        IsoscelesTriangle::new(self.ellipsoid)
    }

    /// Lune composer with the configured number of segments.
    pub fn lune(&self) -> Lune {
        Lune::new(self.ellipsoid).with_segments(self.lune_segments)
    }

    /// Regular polygon composer.
    pub fn regular_polygon(&self) -> RegularPolygon {
        RegularPolygon::new(self.ellipsoid)
    }

    /// Offset line composer.
    pub fn offset_line(&self) -> OffsetLine {
        OffsetLine
    }

    /// Height statistics for the configured ellipsoid.
    pub fn statistics(&self) -> Statistics {
        Statistics::new(self.ellipsoid)
    }

    /// Regular polygon with the configured number of sides, see [`RegularPolygon::positions`].
    pub fn polygon_positions<'a>(&self, positions: &'a [Position3]) -> Cow<'a, [Position3]> {
        self.regular_polygon().positions(positions, self.polygon_sides)
    }
}
