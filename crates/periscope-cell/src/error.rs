//! Error types for periodic cell construction.

use std::fmt;

/// Errors arising from cell validation.
#[derive(Debug, Clone)]
pub enum CellError {
    /// An edge length is non-positive or non-finite.
    InvalidLength {
        /// Axis name ("x", "y", or "z").
        axis: &'static str,
        /// The offending length.
        value: f64,
    },
    /// A box angle deviates from 90° beyond tolerance.
    NotOrthorhombic {
        /// Angle name ("alpha", "beta", or "gamma").
        angle: &'static str,
        /// The offending angle, in degrees.
        value: f64,
    },
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { axis, value } => {
                write!(f, "box length on axis {axis} must be positive and finite, got {value}")
            }
            Self::NotOrthorhombic { angle, value } => {
                write!(f, "box angle {angle} must be 90 degrees, got {value}")
            }
        }
    }
}

impl std::error::Error for CellError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_length() {
        let err = CellError::InvalidLength { axis: "y", value: -3.0 };
        assert_eq!(
            err.to_string(),
            "box length on axis y must be positive and finite, got -3"
        );
    }

    #[test]
    fn display_not_orthorhombic() {
        let err = CellError::NotOrthorhombic { angle: "gamma", value: 120.0 };
        assert_eq!(err.to_string(), "box angle gamma must be 90 degrees, got 120");
    }
}
