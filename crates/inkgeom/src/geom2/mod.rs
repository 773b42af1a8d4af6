//! Ink geometry in 2D: points, segments, implicit lines, distances.
//!
//! Purpose
//! - Provide the line/segment algebra shape recognizers build on: implicit-line
//!   conversion, intersection, perpendiculars, parallelism and distances.
//! - Keep every degenerate case explicit (zero-length segments, parallel lines)
//!   and report it as a typed value instead of a best-effort number.
//!
//! Conventions
//! - All “effectively zero” tests use `tol::EPS` (0.001), an absolute tolerance
//!   tuned for pen coordinates in screen units.
//! - Intersections are of the infinite carrier lines; boundedness is checked by
//!   the caller (`is_on_bounding_box`).
//!
//! References
//! - Code cross-refs: `stroke::features` (consumer), `shape::Shape`

mod distance;
mod line;
mod types;

pub use distance::{
    closest_approach, distance, distance_point_to_segment, distance_segment_to_segment,
    foot_of_perpendicular,
};
pub use line::{
    intersect, is_on_bounding_box, is_parallel, perpendicular_segment, solve, to_implicit,
    try_intersect,
};
pub use types::{BoundingBox, ImplicitLine, Point, Segment};
