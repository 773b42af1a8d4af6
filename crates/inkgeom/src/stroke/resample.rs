//! Arc-length resampling.
//!
//! Model
//! - Spacing `s = D / diagonal_threshold`, `D` the stroke's bounding-box diagonal.
//! - Walk the original points accumulating path length from the last emitted
//!   point. Whenever it exceeds `s`, emit a point at fraction `s / acc` between
//!   the last emitted point and the current original point, make it the new
//!   reference and keep the remainder `acc - s`.
//! - The original first and last points are always emitted, even if an
//!   interpolated point landed next to them.

use crate::error::GeomError;
use crate::geom2::{BoundingBox, Point};

/// Resample using the diagonal of the points' own bounding box.
pub fn resample(points: &[Point], diagonal_threshold: i32) -> Result<Vec<Point>, GeomError> {
    let diagonal = BoundingBox::of_points(points).map_or(0.0, |bb| bb.diagonal());
    resample_with_diagonal(points, diagonal, diagonal_threshold)
}

/// Resample with a caller-supplied diagonal length (e.g. cached by the owning shape).
pub fn resample_with_diagonal(
    points: &[Point],
    diagonal: f64,
    diagonal_threshold: i32,
) -> Result<Vec<Point>, GeomError> {
    if diagonal_threshold <= 0 {
        return Err(GeomError::InvalidArgument("diagonal_threshold must be positive"));
    }
    if !(diagonal.is_finite()) || diagonal < 0.0 {
        return Err(GeomError::InvalidArgument("diagonal must be finite and non-negative"));
    }
    let (first, last) = match (points.first(), points.last()) {
        (Some(f), Some(l)) => (*f, *l),
        _ => return Ok(Vec::new()),
    };
    let spacing = diagonal / f64::from(diagonal_threshold);
    let mut out = vec![first];
    if spacing > 0.0 {
        let mut reference = first;
        let mut prev = first;
        let mut acc = 0.0;
        for next in &points[1..] {
            acc += prev.distance(next);
            while acc > spacing {
                let q = reference.lerp(next, spacing / acc);
                out.push(q);
                reference = q;
                acc -= spacing;
            }
            prev = *next;
        }
    }
    out.push(last);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_gets_uniform_spacing() {
        let pts = [Point::with_time(0.0, 0.0, 0), Point::with_time(100.0, 0.0, 1000)];
        let out = resample(&pts, 10).unwrap();
        // acc == spacing at the end does not emit, so 9 interior points.
        assert_eq!(out.len(), 11);
        assert_eq!(out[0], pts[0]);
        assert_eq!(out[10], pts[1]);
        for (k, p) in out.iter().enumerate().take(10) {
            assert!((p.x() - 10.0 * k as f64).abs() < 1e-9, "k={} x={}", k, p.x());
            assert_eq!(p.time, Some(100 * k as i64));
        }
    }

    #[test]
    fn remainder_carries_across_original_points() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(6.0, 0.0),
            Point::new(9.0, 0.0),
        ];
        // spacing 2.25; the last remainder equals the spacing and emits nothing
        let out = resample_with_diagonal(&pts, 9.0, 4).unwrap();
        let xs: Vec<f64> = out.iter().map(|p| p.x()).collect();
        let expected = [0.0, 2.25, 4.5, 6.75, 9.0];
        assert_eq!(xs.len(), expected.len());
        for (x, e) in xs.iter().zip(expected) {
            assert!((x - e).abs() < 1e-9);
        }
    }

    #[test]
    fn endpoints_and_input_preserved() {
        let pts = vec![
            Point::with_time(0.0, 0.0, 0),
            Point::with_time(10.0, 0.0, 100),
            Point::with_time(10.0, 10.0, 200),
        ];
        let before = pts.clone();
        let out = resample(&pts, 20).unwrap();
        assert_eq!(out.first(), pts.first());
        assert_eq!(out.last(), pts.last());
        assert_eq!(pts, before);
        assert!(out.len() > pts.len());
    }

    #[test]
    fn invalid_threshold_and_trivial_inputs() {
        let pts = [Point::new(1.0, 1.0)];
        assert_eq!(
            resample(&pts, 0),
            Err(GeomError::InvalidArgument("diagonal_threshold must be positive"))
        );
        assert!(resample(&pts, -3).is_err());
        assert!(resample_with_diagonal(&pts, f64::NAN, 5).is_err());
        assert_eq!(resample(&[], 20).unwrap(), Vec::<Point>::new());
        // Single point: emitted as both first and last.
        assert_eq!(resample(&pts, 20).unwrap(), vec![pts[0], pts[0]]);
        // All coincident: zero spacing, no interpolation.
        let dots = [Point::new(2.0, 2.0); 4];
        assert_eq!(resample(&dots, 20).unwrap().len(), 2);
    }

    #[test]
    fn huge_threshold_on_zero_extent_stays_small() {
        let pts = [Point::new(1.0, 1.0)];
        assert_eq!(resample(&pts, i32::MAX).unwrap(), vec![pts[0], pts[0]]);
        let dots = [Point::with_time(-4.0, 3.0, 7); 3];
        assert_eq!(resample(&dots, i32::MAX).unwrap(), vec![dots[0], dots[2]]);
    }
}
