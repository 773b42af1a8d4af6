//! Recognized shapes as a single tagged type.
//!
//! Recognizers emit `Shape` values built from strokes; geometry queries (extent,
//! distances between primitive edges) go through the `geom2` algebra.

use nalgebra::Vector2;

use crate::geom2::{closest_approach, distance_point_to_segment, BoundingBox, Point, Segment};
use crate::stroke::Stroke;

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Point(Point),
    Segment(Segment),
    Circle { center: Point, radius: f64 },
    Rectangle(BoundingBox),
    Stroke(Stroke),
    Composite(Vec<Shape>),
}

impl Shape {
    /// Axis-aligned extent; `None` for empty strokes/composites.
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        match self {
            Shape::Point(p) => Some(BoundingBox::spanning(p.xy, p.xy)),
            Shape::Segment(s) => Some(s.bounding_box()),
            Shape::Circle { center, radius } => {
                let r = Vector2::new(radius.abs(), radius.abs());
                Some(BoundingBox::spanning(center.xy - r, center.xy + r))
            }
            Shape::Rectangle(bb) => Some(*bb),
            Shape::Stroke(s) => s.bounding_box(),
            Shape::Composite(children) => children
                .iter()
                .filter_map(Shape::bounding_box)
                .reduce(|a, b| a.union(&b)),
        }
    }

    /// Bounding-box diagonal, the scale reference for resampling; `0` when empty.
    pub fn diagonal(&self) -> f64 {
        self.bounding_box().map_or(0.0, |bb| bb.diagonal())
    }

    /// Straight edges making up the shape (circles contribute none).
    pub fn segments(&self) -> Vec<Segment> {
        match self {
            Shape::Point(_) | Shape::Circle { .. } => Vec::new(),
            Shape::Segment(s) => vec![*s],
            Shape::Rectangle(bb) => {
                let c = [
                    Point::new(bb.min.x, bb.min.y),
                    Point::new(bb.max.x, bb.min.y),
                    Point::new(bb.max.x, bb.max.y),
                    Point::new(bb.min.x, bb.max.y),
                ];
                (0..4).map(|k| Segment::new(c[k], c[(k + 1) % 4])).collect()
            }
            Shape::Stroke(s) => s
                .points()
                .windows(2)
                .map(|w| Segment::new(w[0], w[1]))
                .collect(),
            Shape::Composite(children) => children.iter().flat_map(Shape::segments).collect(),
        }
    }

    /// Distance from `p` to the shape's outline; `None` for empty shapes.
    pub fn distance_to_point(&self, p: &Point) -> Option<f64> {
        match self {
            Shape::Point(q) => Some(p.distance(q)),
            Shape::Circle { center, radius } => Some((p.distance(center) - radius.abs()).abs()),
            Shape::Stroke(s) if s.len() == 1 => Some(p.distance(&s.points()[0])),
            Shape::Composite(children) => children
                .iter()
                .filter_map(|c| c.distance_to_point(p))
                .reduce(f64::min),
            _ => self
                .segments()
                .iter()
                .map(|s| distance_point_to_segment(p, s))
                .reduce(f64::min),
        }
    }

    /// Minimum closest-approach distance between the straight edges of two shapes.
    pub fn edge_distance(&self, other: &Shape) -> Option<f64> {
        let mine = self.segments();
        let theirs = other.segments();
        mine.iter()
            .flat_map(|a| theirs.iter().map(move |b| closest_approach(a, b)))
            .reduce(f64::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn composite_bbox_is_union() {
        let shape = Shape::Composite(vec![
            Shape::Circle {
                center: Point::new(0.0, 0.0),
                radius: 1.0,
            },
            Shape::Segment(Segment::from_coords(2.0, 2.0, 5.0, 3.0)),
            Shape::Stroke(Stroke::default()),
        ]);
        let bb = shape.bounding_box().unwrap();
        assert_eq!(bb.min, vector![-1.0, -1.0]);
        assert_eq!(bb.max, vector![5.0, 3.0]);
        assert!((shape.diagonal() - 52f64.sqrt()).abs() < 1e-12);
        assert!(Shape::Composite(vec![]).bounding_box().is_none());
    }

    #[test]
    fn rectangle_edges_and_point_distance() {
        let rect = Shape::Rectangle(BoundingBox::spanning(vector![0.0, 0.0], vector![4.0, 2.0]));
        assert_eq!(rect.segments().len(), 4);
        let d = rect.distance_to_point(&Point::new(2.0, 1.5)).unwrap();
        assert!((d - 0.5).abs() < 1e-9);
        let c = Shape::Circle {
            center: Point::new(0.0, 0.0),
            radius: 2.0,
        };
        assert!((c.distance_to_point(&Point::new(0.0, 5.0)).unwrap() - 3.0).abs() < 1e-12);
        assert!(Shape::Stroke(Stroke::default())
            .distance_to_point(&Point::new(0.0, 0.0))
            .is_none());
    }

    #[test]
    fn edge_distance_between_strokes() {
        let a: Stroke = [Point::new(0.0, 0.0), Point::new(10.0, 0.0)].into_iter().collect();
        let b: Stroke = [Point::new(4.0, 1.0), Point::new(6.0, 1.0), Point::new(6.0, 3.0)]
            .into_iter()
            .collect();
        let d = Shape::Stroke(a).edge_distance(&Shape::Stroke(b)).unwrap();
        assert!((d - 1.0).abs() < 1e-9);
        assert!(Shape::Point(Point::new(0.0, 0.0))
            .edge_distance(&Shape::Segment(Segment::from_coords(0.0, 0.0, 1.0, 0.0)))
            .is_none());
    }
}
