//! Strokes: resampling, duplicate filters and feature extraction.
//!
//! Purpose
//! - Turn one pen-down..pen-up point sequence into the scalar descriptors that
//!   gesture/shape classifiers consume.
//! - Everything operates on borrowed `&[Point]`; `Stroke` is a thin owner for
//!   callers that want the bounding box cached next to the points.
//!
//! Pipeline
//! - raw points → (optional) `resample` → `stroke_features` → `FeatureVector`.

pub mod features;
pub mod filter;
pub mod resample;

pub use features::{stroke_features, stroke_features_with, FeatureCfg, FeatureVector, FEATURE_NAMES};
pub use filter::{dedup_coords, dedup_times};
pub use resample::{resample, resample_with_diagonal};

use crate::error::GeomError;
use crate::geom2::{BoundingBox, Point};

/// Ordered point sequence of one pen motion (insertion order = temporal order).
///
/// Invariants:
/// - `bbox` is `None` iff `points` is empty and always matches `points`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    bbox: Option<BoundingBox>,
}

impl Stroke {
    pub fn new(points: Vec<Point>) -> Self {
        let bbox = BoundingBox::of_points(&points);
        Self { points, bbox }
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn push(&mut self, p: Point) {
        match self.bbox.as_mut() {
            Some(bb) => bb.include(p.xy),
            None => self.bbox = BoundingBox::of_points(std::slice::from_ref(&p)),
        }
        self.points.push(p);
    }
    #[inline]
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.bbox
    }
    /// Bounding-box diagonal; `0` for an empty stroke.
    #[inline]
    pub fn diagonal(&self) -> f64 {
        self.bbox.map_or(0.0, |bb| bb.diagonal())
    }
    /// Resampled copy using the cached diagonal.
    pub fn resample(&self, diagonal_threshold: i32) -> Result<Stroke, GeomError> {
        resample_with_diagonal(&self.points, self.diagonal(), diagonal_threshold).map(Stroke::new)
    }
    pub fn features(&self) -> FeatureVector {
        stroke_features(&self.points)
    }
}

impl FromIterator<Point> for Stroke {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Stroke::new(iter.into_iter().collect())
    }
}
