//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoShapeError {
    /// Ellipsoid parameters do not describe an oblate spheroid.
    #[error("invalid ellipsoid: semimajor axis {semimajor}, inverse flattening {inv_flattening}")]
    InvalidEllipsoid {
        /// Semimajor axis that was given.
        semimajor: f64,
        /// Inverse flattening that was given.
        inv_flattening: f64,
    },
    /// Name of a rotation axis could not be parsed.
    #[error("unknown axis name: {0}")]
    UnknownAxis(String),
}
