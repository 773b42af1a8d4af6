//! Flat function-call API for recognizers.
//!
//! Thin re-exports so callers can write `api::intersect(&a, &b)` without
//! knowing the module layout. Names follow the operations recognizers use.

pub use crate::geom2::{
    closest_approach, distance, distance_point_to_segment, distance_segment_to_segment,
    intersect, is_on_bounding_box, is_parallel, perpendicular_segment, to_implicit,
    try_intersect,
};
pub use crate::stroke::features::{is_line, max_squared_speed, rotation, turning_angles};
pub use crate::stroke::{resample, resample_with_diagonal, stroke_features, stroke_features_with};
