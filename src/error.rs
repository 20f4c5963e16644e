//! Errors raised when setting up an orbit.

use thiserror::Error;

/// Result type for orbit set-up.
pub type OrbitResult<T> = Result<T, InvalidOrbitError>;

/// Inputs that cannot seed a bound two-body orbit.
///
/// Only initialisation fails this way. Once a body is integrating, degenerate
/// geometry resolves to a number instead of an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidOrbitError {
    #[error("eccentricity must be non-negative, got {0}")]
    NegativeEccentricity(f64),

    #[error("eccentricity {0} does not describe a bound orbit (must be < 1)")]
    UnboundEccentricity(f64),

    #[error("semi-major axis must be positive, got {0}")]
    NonPositiveSemimajorAxis(f64),

    #[error("inclination must lie in [0, 180] degrees, got {0:.3} deg")]
    InclinationOutOfRange(f64),

    #[error("{field} is not a finite number ({value})")]
    NonFinite { field: &'static str, value: f64 },

    #[error("gravitational parameter must be positive, got {0}")]
    NonPositiveGravitationalParameter(f64),

    #[error("initial position has zero magnitude")]
    ZeroPosition,
}
