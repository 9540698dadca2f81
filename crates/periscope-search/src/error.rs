//! Error types for the periodic search engine.

use periscope_cell::CellError;
use std::fmt;

/// Errors arising from engine construction, coordinate ingest, or queries.
#[derive(Debug, Clone)]
pub enum SearchError {
    /// A coordinate row does not have exactly 3 components.
    ///
    /// The display text of this variant is part of the public contract and
    /// must not change.
    Dimension,
    /// A query was attempted before any coordinates were set.
    NoCoordinates,
    /// The search radius is negative or non-finite.
    InvalidRadius {
        /// The offending radius.
        radius: f64,
    },
    /// The search radius exceeds half the shortest box edge, beyond which
    /// single-shell image enumeration returns wrong neighbour sets.
    RadiusTooLarge {
        /// The offending radius.
        radius: f64,
        /// Largest radius this cell supports.
        max: f64,
    },
    /// The box descriptor failed validation.
    Cell(CellError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dimension => {
                write!(f, "coords must be a sequence of 3 dimensional coordinates")
            }
            Self::NoCoordinates => {
                write!(f, "no coordinates set; call set_coords before searching")
            }
            Self::InvalidRadius { radius } => {
                write!(f, "search radius must be non-negative and finite, got {radius}")
            }
            Self::RadiusTooLarge { radius, max } => {
                write!(
                    f,
                    "search radius {radius} exceeds half the shortest box edge ({max})"
                )
            }
            Self::Cell(err) => write!(f, "invalid box: {err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Cell(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CellError> for SearchError {
    fn from(err: CellError) -> Self {
        Self::Cell(err)
    }
}
