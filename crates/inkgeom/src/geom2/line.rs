//! Implicit lines, intersections, perpendiculars and parallelism.
//!
//! - `to_implicit`: vertical / horizontal / general cascade with a checked post-condition.
//! - `solve`: closed-form 2×2 solve (Cramer's rule) with explicit degenerate cases.
//! - `try_intersect` / `intersect`: infinite-line intersection of two segments.
//!
//! Zero-length segments
//! - A segment whose endpoints coincide maps to `ImplicitLine::ZERO`, which every
//!   point satisfies. Intersecting it with a proper line yields that line's
//!   canonical point; this is an artifact of the zero-length segment, not a true
//!   crossing. Two zero-length segments intersect only if they coincide.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::{Matrix2, Vector2};

use super::types::{ImplicitLine, Point, Segment};
use crate::error::GeomError;
use crate::tol::EPS;

/// Implicit form of the line through `p1` and `p2`.
///
/// Errors with `InvalidGeometry` if either endpoint misses the resulting line
/// by `EPS` or more (e.g. non-finite coordinates or catastrophic cancellation).
pub fn to_implicit(p1: &Point, p2: &Point) -> Result<ImplicitLine, GeomError> {
    let d = p2.xy - p1.xy;
    let line = if d.x.abs() < EPS {
        ImplicitLine::new(1.0, 0.0, p1.x())
    } else if d.y.abs() < EPS {
        ImplicitLine::new(0.0, 1.0, p1.y())
    } else {
        let slope = d.y / d.x;
        let intercept = p1.y() - slope * p1.x();
        ImplicitLine::new(-slope, 1.0, intercept)
    };
    if line.contains_eps(p1.xy, EPS) && line.contains_eps(p2.xy, EPS) {
        Ok(line)
    } else {
        Err(GeomError::InvalidGeometry)
    }
}

/// Implicit form of a segment's carrier line; `ZERO` for a zero-length segment.
fn carrier(s: &Segment) -> Result<ImplicitLine, GeomError> {
    if s.is_degenerate() {
        Ok(ImplicitLine::ZERO)
    } else {
        to_implicit(&s.p1, &s.p2)
    }
}

/// Unique common point of two implicit lines.
pub fn solve(l1: &ImplicitLine, l2: &ImplicitLine) -> Result<Vector2<f64>, GeomError> {
    match (l1.is_degenerate(), l2.is_degenerate()) {
        (true, true) => return Err(GeomError::NoIntersection),
        (true, false) => return solve_against_degenerate(l1, l2),
        (false, true) => return solve_against_degenerate(l2, l1),
        (false, false) => {}
    }
    let det = Matrix2::new(l1.a, l1.b, l2.a, l2.b).determinant();
    if !det.is_finite() {
        return Err(GeomError::InvalidGeometry);
    }
    if det.abs() < EPS {
        return Err(GeomError::Parallel);
    }
    let x = Matrix2::new(l1.c, l1.b, l2.c, l2.b).determinant() / det;
    let y = Matrix2::new(l1.a, l1.c, l2.a, l2.c).determinant() / det;
    Ok(Vector2::new(x, y))
}

fn solve_against_degenerate(
    degenerate: &ImplicitLine,
    proper: &ImplicitLine,
) -> Result<Vector2<f64>, GeomError> {
    if degenerate.is_identically_zero() {
        proper.canonical_point().ok_or(GeomError::NoIntersection)
    } else {
        // 0 = c with c ≠ 0
        Err(GeomError::NoIntersection)
    }
}

/// Intersection of the infinite lines carrying `a` and `b`.
pub fn try_intersect(a: &Segment, b: &Segment) -> Result<Point, GeomError> {
    if a.is_degenerate() && b.is_degenerate() {
        return if (a.p1.xy - b.p1.xy).norm() < EPS {
            Ok(a.p1)
        } else {
            Err(GeomError::NoIntersection)
        };
    }
    let la = carrier(a)?;
    let lb = carrier(b)?;
    solve(&la, &lb).map(Point::from_vec)
}

/// Like `try_intersect`, discarding the reason when there is no unique point.
#[inline]
pub fn intersect(a: &Segment, b: &Segment) -> Option<Point> {
    try_intersect(a, b).ok()
}

/// Segment of `length` starting at `p`, rotated +90° from `reference`'s direction.
pub fn perpendicular_segment(p: &Point, length: f64, reference: &Segment) -> Segment {
    let theta = reference.angle() + FRAC_PI_2;
    let end = p.xy + Vector2::new(theta.cos(), theta.sin()) * length;
    Segment::new(*p, Point::from_vec(end))
}

/// `p` lies inside the rectangle spanned by the segment's endpoints (inclusive, `EPS` slack).
#[inline]
pub fn is_on_bounding_box(p: &Point, segment: &Segment) -> bool {
    segment.bounding_box().contains_eps(p.xy, EPS)
}

/// Direction angles agree modulo π within `percent_threshold · π/2`.
///
/// `0` accepts only exact parallels, `1` accepts everything; values outside
/// `[0, 1]` are clamped and `NaN` is treated as `0`.
pub fn is_parallel(a: &Segment, b: &Segment, percent_threshold: f64) -> bool {
    let pct = if percent_threshold.is_nan() {
        0.0
    } else {
        percent_threshold.clamp(0.0, 1.0)
    };
    let diff = (a.angle() - b.angle()).rem_euclid(PI);
    let limit = pct * FRAC_PI_2;
    diff <= limit || diff >= PI - limit
}
