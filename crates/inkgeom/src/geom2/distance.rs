//! Point/segment distances.
//!
//! - `distance_point_to_segment`: perpendicular foot when it lands on the segment,
//!   nearest endpoint otherwise. The foot is a projection onto the segment's
//!   direction, never an intersection of snapped implicit lines.
//! - `distance_segment_to_segment`: the recognizer's crossing heuristic (see its docs).
//! - `closest_approach`: exact minimum distance between two bounded segments.

use super::line::{is_on_bounding_box, try_intersect};
use super::types::{Point, Segment};
use crate::error::GeomError;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p: &Point, q: &Point) -> f64 {
    p.distance(q)
}

/// Foot of the perpendicular dropped from `p` onto the line carrying `s`.
///
/// Computed by projecting `p - s.p1` onto `s.delta()`, so short segments
/// inside the `EPS` band keep an exact foot. Errors with `InvalidGeometry`
/// for a degenerate `s` or a non-finite result.
pub fn foot_of_perpendicular(p: &Point, s: &Segment) -> Result<Point, GeomError> {
    let d = s.delta();
    let len2 = d.norm_squared();
    if s.is_degenerate() || !len2.is_finite() {
        return Err(GeomError::InvalidGeometry);
    }
    let t = (p.xy - s.p1.xy).dot(&d) / len2;
    let foot = s.p1.xy + d * t;
    if foot.x.is_finite() && foot.y.is_finite() {
        Ok(Point::from_vec(foot))
    } else {
        Err(GeomError::InvalidGeometry)
    }
}

/// Distance from `p` to the bounded segment `s`.
///
/// Nearest endpoint whenever the foot is off the segment or cannot be computed.
pub fn distance_point_to_segment(p: &Point, s: &Segment) -> f64 {
    if s.is_degenerate() {
        return p.distance(&s.p1);
    }
    match foot_of_perpendicular(p, s) {
        Ok(foot) if is_on_bounding_box(&foot, s) => p.distance(&foot),
        _ => p.distance(&s.p1).min(p.distance(&s.p2)),
    }
}

/// Heuristic segment-to-segment distance used by shape recognizers.
///
/// Takes the intersection of the two carrier lines (or `b.p1` when they are
/// parallel), measures how far that pivot lies from each bounded segment, and
/// compares the larger of the two against the distances from `b`'s endpoints to
/// `a`. It is not the true closest approach: `a`'s endpoints are never measured
/// against `b`, so e.g. a short `a` hovering over the middle of a long `b` is
/// overestimated. Use `closest_approach` when exactness matters.
pub fn distance_segment_to_segment(a: &Segment, b: &Segment) -> f64 {
    if a.is_degenerate() {
        return distance_point_to_segment(&a.p1, b);
    }
    if b.is_degenerate() {
        return distance_point_to_segment(&b.p1, a);
    }
    let pivot = try_intersect(a, b).unwrap_or(b.p1);
    let crossing = distance_point_to_segment(&pivot, a).max(distance_point_to_segment(&pivot, b));
    crossing
        .min(distance_point_to_segment(&b.p1, a))
        .min(distance_point_to_segment(&b.p2, a))
}

/// Exact minimum distance between two bounded segments.
pub fn closest_approach(a: &Segment, b: &Segment) -> f64 {
    if properly_cross(a, b) {
        return 0.0;
    }
    distance_point_to_segment(&a.p1, b)
        .min(distance_point_to_segment(&a.p2, b))
        .min(distance_point_to_segment(&b.p1, a))
        .min(distance_point_to_segment(&b.p2, a))
}

#[inline]
fn orient(s: &Segment, p: &Point) -> f64 {
    let ab = s.delta();
    let ap = p.xy - s.p1.xy;
    ab.x * ap.y - ab.y * ap.x
}

/// Interiors cross at a single point (touching and collinear overlaps excluded).
fn properly_cross(a: &Segment, b: &Segment) -> bool {
    let o1 = orient(a, &b.p1);
    let o2 = orient(a, &b.p2);
    let o3 = orient(b, &a.p1);
    let o4 = orient(b, &a.p2);
    o1 * o2 < 0.0 && o3 * o4 < 0.0
}
