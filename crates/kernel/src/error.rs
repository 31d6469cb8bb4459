use thiserror::Error;

use crate::geometry::numeric::Numeric;

/// Which axial bound of an extruded solid an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl std::fmt::Display for Bound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bound::Start => write!(f, "start"),
            Bound::End => write!(f, "end"),
        }
    }
}

/// Structured failure information for CSG construction and geometry helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CsgError {
    #[error("cannot normalize zero-length {what}")]
    ZeroVector { what: &'static str },

    #[error("start distance {start} is greater than end distance {end}")]
    InvertedBounds { start: Numeric, end: Numeric },

    #[error("{what} must not be negative, got {value}")]
    NegativeDimension { what: &'static str, value: Numeric },

    #[error("orientation matrix is not orthonormal")]
    NotOrthonormal,

    #[error("invalid convex polygon: {reason}")]
    InvalidPolygon { reason: String },

    #[error("solid is unbounded at its {bound} end")]
    Unbounded { bound: Bound },
}

/// Reject `start > end` when both bounds are present.
pub(crate) fn check_bounds(start: &Option<Numeric>, end: &Option<Numeric>) -> Result<(), CsgError> {
    if let (Some(s), Some(e)) = (start, end) {
        if s > e {
            return Err(CsgError::InvertedBounds {
                start: s.clone(),
                end: e.clone(),
            });
        }
    }
    Ok(())
}
