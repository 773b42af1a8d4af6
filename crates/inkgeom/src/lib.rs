//! Ink geometry and stroke-feature engine for pen-input recognition.
//!
//! Layout
//! - `geom2`: points, segments, implicit lines, intersections, distances.
//! - `stroke`: duplicate filters, arc-length resampling, feature extraction.
//! - `shape`: recognized shapes as one tagged type.
//! - `synth`: seeded synthetic strokes for benches and tests.
//! - `api`: the flat function-call surface consumed by recognizers.
//!
//! Everything is a pure function over borrowed value types; undefined cases come
//! back as `NaN`, `None` or a `GeomError`, never as a panic.

pub mod api;
pub mod error;
pub mod geom2;
pub mod shape;
pub mod stroke;
pub mod synth;
pub mod tol;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GeomError;
pub use geom2::{BoundingBox, ImplicitLine, Point, Segment};
pub use nalgebra::Vector2 as Vec2;
pub use shape::Shape;
pub use stroke::{FeatureVector, Stroke};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::api::*;
    pub use crate::geom2::{BoundingBox, ImplicitLine, Point, Segment};
    pub use crate::shape::Shape;
    pub use crate::stroke::{FeatureCfg, FeatureVector, Stroke, FEATURE_NAMES};
    pub use crate::synth::{draw_batch, draw_stroke, ReplayToken, StrokeKind, SynthCfg};
    pub use crate::GeomError;
}
