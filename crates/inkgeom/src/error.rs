//! Error taxonomy for the geometry and stroke engine.
//!
//! Nothing here is fatal: every variant is a value the caller can branch on.

use std::fmt;

/// Errors surfaced by geometry and resampling routines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A line could not be represented faithfully (post-condition residual too large).
    InvalidGeometry,
    /// Fewer points than the computation requires.
    InsufficientPoints { needed: usize, got: usize },
    /// The two lines are parallel or coincident; no unique intersection.
    Parallel,
    /// The system has no solution (degenerate or contradictory equations).
    NoIntersection,
    /// A caller-supplied parameter is out of range.
    InvalidArgument(&'static str),
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::InvalidGeometry => {
                write!(f, "implicit line does not pass through its defining points")
            }
            GeomError::InsufficientPoints { needed, got } => {
                write!(f, "need at least {} points, got {}", needed, got)
            }
            GeomError::Parallel => write!(f, "lines are parallel (no unique intersection)"),
            GeomError::NoIntersection => write!(f, "lines have no intersection"),
            GeomError::InvalidArgument(what) => write!(f, "invalid argument: {}", what),
        }
    }
}

impl std::error::Error for GeomError {}
