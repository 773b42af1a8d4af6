//! Basic 2D value types for ink geometry.
//!
//! - `Point`: coordinates plus an optional capture timestamp.
//! - `Segment`: ordered endpoint pair; the order defines the direction angle.
//! - `ImplicitLine`: `A·x + B·y = C`, derived on demand, never stored on a segment.
//! - `BoundingBox`: axis-aligned extent of a point set.
//!
//! References
//! - Code cross-refs: `line::{to_implicit, try_intersect}`, `distance`

use nalgebra::Vector2;

use crate::tol::EPS;

/// Ink sample: position and (optional) timestamp in milliseconds.
///
/// Equality compares coordinates and time; use `same_coords` for position only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub xy: Vector2<f64>,
    pub time: Option<i64>,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            xy: Vector2::new(x, y),
            time: None,
        }
    }
    #[inline]
    pub fn with_time(x: f64, y: f64, time: i64) -> Self {
        Self {
            xy: Vector2::new(x, y),
            time: Some(time),
        }
    }
    #[inline]
    pub fn from_vec(xy: Vector2<f64>) -> Self {
        Self { xy, time: None }
    }
    #[inline]
    pub fn x(&self) -> f64 {
        self.xy.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.xy.y
    }
    #[inline]
    pub fn same_coords(&self, other: &Point) -> bool {
        self.xy == other.xy
    }
    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.xy - other.xy).norm()
    }
    /// Linear interpolation at `t ∈ [0,1]`; time is interpolated (rounded) only if both ends carry one.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        let xy = self.xy + (other.xy - self.xy) * t;
        let time = match (self.time, other.time) {
            (Some(a), Some(b)) => Some(a + ((b - a) as f64 * t).round() as i64),
            _ => None,
        };
        Point { xy, time }
    }
}

/// Ordered pair of points.
///
/// Invariants:
/// - Degenerate iff both endpoints share coordinates; callers special-case it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
    #[inline]
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p1.same_coords(&self.p2)
    }
    #[inline]
    pub fn delta(&self) -> Vector2<f64> {
        self.p2.xy - self.p1.xy
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.delta().norm()
    }
    /// Direction angle `atan2(dy, dx)` in `(-π, π]`; `0` for a degenerate segment.
    #[inline]
    pub fn angle(&self) -> f64 {
        let d = self.delta();
        d.y.atan2(d.x)
    }
    #[inline]
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::spanning(self.p1.xy, self.p2.xy)
    }
}

/// Implicit line `a·x + b·y = c`.
///
/// Normalization produced by `to_implicit`: vertical `(1,0,x)`, horizontal
/// `(0,1,y)`, general `(-slope, 1, intercept)`. `ZERO` is the identically-zero
/// equation standing in for a zero-length segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImplicitLine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl ImplicitLine {
    pub const ZERO: ImplicitLine = ImplicitLine {
        a: 0.0,
        b: 0.0,
        c: 0.0,
    };

    #[inline]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }
    /// Signed residual `a·x + b·y − c`.
    #[inline]
    pub fn residual(&self, p: Vector2<f64>) -> f64 {
        self.a * p.x + self.b * p.y - self.c
    }
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        self.residual(p).abs() < eps
    }
    /// Both coefficients vanish: the equation constrains nothing (or is contradictory).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a.abs() < EPS && self.b.abs() < EPS
    }
    #[inline]
    pub fn is_identically_zero(&self) -> bool {
        self.is_degenerate() && self.c.abs() < EPS
    }
    /// Point of the line closest to the origin, `(a·c, b·c) / (a² + b²)`.
    pub fn canonical_point(&self) -> Option<Vector2<f64>> {
        let n2 = self.a * self.a + self.b * self.b;
        if !(n2.is_finite()) || n2 <= 0.0 {
            return None;
        }
        Some(Vector2::new(self.a * self.c, self.b * self.c) / n2)
    }
}

/// Axis-aligned rectangle `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl BoundingBox {
    /// Rectangle spanned by two corners in any order.
    #[inline]
    pub fn spanning(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            min: Vector2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }
    /// Extent of `points`; `None` when empty.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bb = Self {
            min: first.xy,
            max: first.xy,
        };
        for p in &points[1..] {
            bb.include(p.xy);
        }
        Some(bb)
    }
    #[inline]
    pub fn include(&mut self, p: Vector2<f64>) {
        self.min = Vector2::new(self.min.x.min(p.x), self.min.y.min(p.y));
        self.max = Vector2::new(self.max.x.max(p.x), self.max.y.max(p.y));
    }
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        out.include(other.min);
        out.include(other.max);
        out
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).norm()
    }
    /// Angle of the diagonal, `atan2(height, width)` in `[0, π/2]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.height().atan2(self.width())
    }
    /// Inclusive membership with slack `eps` on every side.
    #[inline]
    pub fn contains_eps(&self, p: Vector2<f64>, eps: f64) -> bool {
        p.x >= self.min.x - eps
            && p.x <= self.max.x + eps
            && p.y >= self.min.y - eps
            && p.y <= self.max.y + eps
    }
}
