//! Consecutive-duplicate filters applied before angle and speed computations.
//!
//! Both return a fresh `Vec`; the input slice is never touched.

use crate::geom2::Point;

/// Drop points whose coordinates equal their predecessor's (first of each run kept).
pub fn dedup_coords(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    out.dedup_by(|next, prev| next.same_coords(prev));
    out
}

/// Drop points whose timestamp equals their predecessor's (first of each run kept).
///
/// Untimed points never compare equal, so they are all kept.
pub fn dedup_times(points: &[Point]) -> Vec<Point> {
    let mut out = points.to_vec();
    out.dedup_by(|next, prev| next.time.is_some() && next.time == prev.time);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coords_runs_collapse_to_first() {
        let pts = [
            Point::with_time(0.0, 0.0, 0),
            Point::with_time(0.0, 0.0, 5),
            Point::with_time(1.0, 0.0, 10),
            Point::with_time(1.0, 0.0, 15),
            Point::with_time(0.0, 0.0, 20),
        ];
        let out = dedup_coords(&pts);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].time, Some(0));
        assert_eq!(out[1].time, Some(10));
        assert_eq!(out[2].time, Some(20));
        assert_eq!(pts.len(), 5);
    }

    #[test]
    fn time_runs_collapse_to_first() {
        let pts = [
            Point::with_time(0.0, 0.0, 0),
            Point::with_time(1.0, 0.0, 0),
            Point::with_time(2.0, 0.0, 8),
            Point::new(3.0, 0.0),
            Point::new(4.0, 0.0),
        ];
        let out = dedup_times(&pts);
        assert_eq!(out.len(), 4);
        assert_eq!(out[1].x(), 2.0);
        assert!(dedup_times(&[]).is_empty());
    }
}
