//! Per-stroke scalar features for ink classifiers.
//!
//! Every function is pure over `&[Point]` and total: undefined cases (too few
//! points, zero-length directions, missing timestamps) yield `NaN`.
//!
//! Turning angles
//! - At each interior point of the coordinate-deduplicated stroke, the signed
//!   angle between the incoming and outgoing direction (`atan2(cross, dot)`).
//! - Each angle is unwrapped against the previous *unwrapped* angle so that
//!   consecutive differences lie in `(−π, π]`. The first angle seeds the
//!   sequence as computed.
//!
//! References
//! - Code cross-refs: `filter::{dedup_coords, dedup_times}`, `tol`

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use super::filter::{dedup_coords, dedup_times};
use crate::geom2::{BoundingBox, Point};
use crate::tol::{CURVINESS_ANGLE_LIMIT, DEFAULT_START_INDEX, LINE_CONFIDENCE_THRESHOLD};

/// Feature extraction parameters.
#[derive(Clone, Copy, Debug)]
pub struct FeatureCfg {
    /// Index of the point defining the initial direction (clamped to the last point).
    pub start_index: usize,
}

impl Default for FeatureCfg {
    fn default() -> Self {
        Self {
            start_index: DEFAULT_START_INDEX,
        }
    }
}

/// Unit direction from point 0 towards point `min(k, n-1)`, advancing past
/// points that coincide with point 0. `None` if no distinct point exists.
fn start_direction(points: &[Point], k: usize) -> Option<Vector2<f64>> {
    if points.len() < 2 {
        return None;
    }
    let origin = points[0];
    let mut j = k.min(points.len() - 1);
    while j < points.len() && points[j].same_coords(&origin) {
        j += 1;
    }
    let d = points.get(j)?.xy - origin.xy;
    Some(d / d.norm())
}

pub fn start_angle_cosine(points: &[Point], k: usize) -> f64 {
    start_direction(points, k).map_or(f64::NAN, |d| d.x)
}

pub fn start_angle_sine(points: &[Point], k: usize) -> f64 {
    start_direction(points, k).map_or(f64::NAN, |d| d.y)
}

fn end_direction(points: &[Point]) -> Option<Vector2<f64>> {
    if points.len() < 2 {
        return None;
    }
    let d = points[points.len() - 1].xy - points[0].xy;
    let norm = d.norm();
    if norm > 0.0 {
        Some(d / norm)
    } else {
        None
    }
}

pub fn end_angle_cosine(points: &[Point]) -> f64 {
    end_direction(points).map_or(f64::NAN, |d| d.x)
}

pub fn end_angle_sine(points: &[Point]) -> f64 {
    end_direction(points).map_or(f64::NAN, |d| d.y)
}

/// Path length: sum of distances between consecutive points.
pub fn stroke_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(&w[1])).sum()
}

/// Straight-line distance from first to last point.
pub fn euclidean_distance(points: &[Point]) -> f64 {
    match (points.first(), points.last()) {
        (Some(f), Some(l)) => f.distance(l),
        _ => 0.0,
    }
}

/// `euclidean_distance / stroke_length`; `NaN` for a zero-length path.
pub fn line_confidence(points: &[Point]) -> f64 {
    let length = stroke_length(points);
    if length > 0.0 {
        euclidean_distance(points) / length
    } else {
        f64::NAN
    }
}

#[inline]
pub fn is_line(points: &[Point]) -> bool {
    line_confidence(points) > LINE_CONFIDENCE_THRESHOLD
}

/// `last.time − first.time`; `NaN` if empty or either end is untimed.
pub fn total_time(points: &[Point]) -> f64 {
    match (points.first().and_then(|p| p.time), points.last().and_then(|p| p.time)) {
        (Some(t0), Some(t1)) => (t1 - t0) as f64,
        _ => f64::NAN,
    }
}

/// Maximum of `(dx² + dy²) / dt²` over consecutive points after dropping
/// repeated timestamps. This is squared displacement over squared time, not a
/// speed; `NaN` if any point is untimed or fewer than two timestamps remain.
pub fn max_squared_speed(points: &[Point]) -> f64 {
    if points.is_empty() || points.iter().any(|p| p.time.is_none()) {
        return f64::NAN;
    }
    let timed = dedup_times(points);
    timed
        .windows(2)
        .filter_map(|w| {
            let dt = (w[1].time? - w[0].time?) as f64;
            Some((w[1].xy - w[0].xy).norm_squared() / (dt * dt))
        })
        .fold(f64::NAN, f64::max)
}

/// Unwrapped turning angles at the interior points of the deduplicated stroke.
pub fn turning_angles(points: &[Point]) -> Vec<f64> {
    let pts = dedup_coords(points);
    let mut out: Vec<f64> = Vec::with_capacity(pts.len().saturating_sub(2));
    let mut prev: Option<f64> = None;
    for w in pts.windows(3) {
        let d0 = w[1].xy - w[0].xy;
        let d1 = w[2].xy - w[1].xy;
        let cross = d0.x * d1.y - d0.y * d1.x;
        let mut theta = cross.atan2(d0.dot(&d1));
        if let Some(p) = prev {
            while theta - p > PI {
                theta -= TAU;
            }
            while theta - p <= -PI {
                theta += TAU;
            }
        }
        prev = Some(theta);
        out.push(theta);
    }
    out
}

/// Sums over turning angles; all `NaN` for an empty stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub sum: f64,
    pub absolute: f64,
    pub squared: f64,
    pub curviness: f64,
}

pub fn rotation(points: &[Point]) -> Rotation {
    if points.is_empty() {
        return Rotation {
            sum: f64::NAN,
            absolute: f64::NAN,
            squared: f64::NAN,
            curviness: f64::NAN,
        };
    }
    let mut r = Rotation {
        sum: 0.0,
        absolute: 0.0,
        squared: 0.0,
        curviness: 0.0,
    };
    for theta in turning_angles(points) {
        r.sum += theta;
        r.absolute += theta.abs();
        r.squared += theta * theta;
        if theta.abs() < CURVINESS_ANGLE_LIMIT {
            r.curviness += theta.abs();
        }
    }
    r
}

pub fn rotation_sum(points: &[Point]) -> f64 {
    rotation(points).sum
}

pub fn rotation_absolute(points: &[Point]) -> f64 {
    rotation(points).absolute
}

pub fn rotation_squared(points: &[Point]) -> f64 {
    rotation(points).squared
}

/// Accumulated small-angle turning: the sum of `|θ|` over unwrapped turning
/// angles with `|θ| < CURVINESS_ANGLE_LIMIT` (≈19°). Magnitudes are summed, so
/// left and right wiggles add up instead of cancelling and the result is never
/// negative.
pub fn curviness(points: &[Point]) -> f64 {
    rotation(points).curviness
}

/// Names of `FeatureVector::as_array` entries, in order.
pub const FEATURE_NAMES: [&str; 16] = [
    "start_angle_cosine",
    "start_angle_sine",
    "end_angle_cosine",
    "end_angle_sine",
    "stroke_length",
    "euclidean_distance",
    "line_confidence",
    "total_time",
    "max_squared_speed",
    "rotation_sum",
    "rotation_absolute",
    "rotation_squared",
    "curviness",
    "bounding_box_diagonal",
    "bounding_box_angle",
    "point_count",
];

/// All stroke features, recomputed from the points on every call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureVector {
    pub start_angle_cosine: f64,
    pub start_angle_sine: f64,
    pub end_angle_cosine: f64,
    pub end_angle_sine: f64,
    pub stroke_length: f64,
    pub euclidean_distance: f64,
    pub line_confidence: f64,
    pub total_time: f64,
    pub max_squared_speed: f64,
    pub rotation_sum: f64,
    pub rotation_absolute: f64,
    pub rotation_squared: f64,
    pub curviness: f64,
    pub bounding_box_diagonal: f64,
    pub bounding_box_angle: f64,
    pub point_count: usize,
}

impl FeatureVector {
    #[inline]
    pub fn is_line(&self) -> bool {
        self.line_confidence > LINE_CONFIDENCE_THRESHOLD
    }

    pub fn as_array(&self) -> [f64; 16] {
        [
            self.start_angle_cosine,
            self.start_angle_sine,
            self.end_angle_cosine,
            self.end_angle_sine,
            self.stroke_length,
            self.euclidean_distance,
            self.line_confidence,
            self.total_time,
            self.max_squared_speed,
            self.rotation_sum,
            self.rotation_absolute,
            self.rotation_squared,
            self.curviness,
            self.bounding_box_diagonal,
            self.bounding_box_angle,
            self.point_count as f64,
        ]
    }

    /// `(name, value)` pairs in `FEATURE_NAMES` order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        FEATURE_NAMES.into_iter().zip(self.as_array())
    }
}

pub fn stroke_features(points: &[Point]) -> FeatureVector {
    stroke_features_with(points, &FeatureCfg::default())
}

pub fn stroke_features_with(points: &[Point], cfg: &FeatureCfg) -> FeatureVector {
    let start = start_direction(points, cfg.start_index);
    let end = end_direction(points);
    let rot = rotation(points);
    let bb = BoundingBox::of_points(points);
    FeatureVector {
        start_angle_cosine: start.map_or(f64::NAN, |d| d.x),
        start_angle_sine: start.map_or(f64::NAN, |d| d.y),
        end_angle_cosine: end.map_or(f64::NAN, |d| d.x),
        end_angle_sine: end.map_or(f64::NAN, |d| d.y),
        stroke_length: stroke_length(points),
        euclidean_distance: euclidean_distance(points),
        line_confidence: line_confidence(points),
        total_time: total_time(points),
        max_squared_speed: max_squared_speed(points),
        rotation_sum: rot.sum,
        rotation_absolute: rot.absolute,
        rotation_squared: rot.squared,
        curviness: rot.curviness,
        bounding_box_diagonal: bb.map_or(f64::NAN, |b| b.diagonal()),
        bounding_box_angle: bb.map_or(f64::NAN, |b| b.angle()),
        point_count: points.len(),
    }
}
