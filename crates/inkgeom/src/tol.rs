//! Tolerances and fixed feature parameters.
//!
//! Policy
//! - Defaults are fixed constants to avoid “tolerance juggling” across call
//!   sites. Every “effectively zero” or “effectively parallel” comparison in the
//!   crate goes through `EPS`.

/// Absolute tolerance for zero tests, implicit-line residuals and determinants.
pub const EPS: f64 = 0.001;

/// A stroke counts as a line when `line_confidence` exceeds this ratio.
pub const LINE_CONFIDENCE_THRESHOLD: f64 = 0.95;

/// Turning angles (radians) below this magnitude contribute to curviness (≈19°).
pub const CURVINESS_ANGLE_LIMIT: f64 = 0.331;

/// Default divisor of the bounding-box diagonal used as resample spacing.
pub const DEFAULT_DIAGONAL_THRESHOLD: i32 = 20;

/// Default index of the point that defines the initial stroke direction.
pub const DEFAULT_START_INDEX: usize = 2;
