//! Core 2D shape types: kinds, polygons, and bounding boxes.

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use super::error::ShapeError;
use super::quadrant::Quadrant;
use crate::transform::Affine2;

/// A point on the Cartesian plane.
pub type Point = Vector2<f64>;

/// Which figure the generator drew. Transforms preserve the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Triangle,
    Rectangle,
    Square,
    Trapezoid,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Triangle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Trapezoid,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Triangle => "triangle",
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Trapezoid => "trapezoid",
        }
    }

    /// Vertex count the generator produces for this kind.
    pub fn vertex_count(self) -> usize {
        match self {
            ShapeKind::Triangle => 3,
            _ => 4,
        }
    }
}

impl FromStr for ShapeKind {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| ShapeError::parse("shape kind", s))
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    pub min: Point,
    pub max: Point,
}

impl Bbox {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    /// Midpoint of the box (not the vertex average).
    #[inline]
    pub fn center(&self) -> Point {
        (self.min + self.max) * 0.5
    }
}

/// Closed figure: ordered vertices plus a kind and a quadrant tag.
///
/// Invariants:
/// - At least 3 vertices, all finite.
/// - Values are immutable; transforms return a new `Polygon`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
    kind: ShapeKind,
    quadrant: Quadrant,
}

impl Polygon {
    /// Checked constructor with an explicit quadrant tag.
    pub fn new(points: Vec<Point>, kind: ShapeKind, quadrant: Quadrant) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::TooFewVertices { got: points.len() });
        }
        if let Some(index) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(ShapeError::NonFinite { index });
        }
        Ok(Self {
            points,
            kind,
            quadrant,
        })
    }

    /// Checked constructor that tags the quadrant of the first vertex.
    pub fn from_points(points: Vec<Point>, kind: ShapeKind) -> Result<Self, ShapeError> {
        let q = points.first().map(|p| Quadrant::of(*p)).unwrap_or(Quadrant::Fourth);
        Self::new(points, kind, q)
    }

    /// Snap every coordinate to the integer grid.
    pub(crate) fn snapped(points: Vec<Point>, kind: ShapeKind, quadrant: Quadrant) -> Self {
        debug_assert!(points.len() >= 3);
        Self {
            points: points.into_iter().map(snap).collect(),
            kind,
            quadrant,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }
    #[inline]
    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }
    /// Reference vertex used for quadrant classification.
    #[inline]
    pub fn reference(&self) -> Point {
        self.points[0]
    }

    pub fn bbox(&self) -> Bbox {
        let first = self.points[0];
        let (min, max) = self.points[1..]
            .iter()
            .fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Bbox { min, max }
    }

    /// Map every vertex through `f`, snap to integers, and re-tag the quadrant
    /// from the first image vertex.
    pub fn push_forward(&self, f: &Affine2) -> Polygon {
        let mapped: Vec<Point> = self.points.iter().map(|p| snap(f.apply(*p))).collect();
        let quadrant = Quadrant::of(mapped[0]);
        Polygon {
            points: mapped,
            kind: self.kind,
            quadrant,
        }
    }

    /// `push_forward` for maps whose image may leave the finite range (large or
    /// non-finite translations). Fails with the index of the first bad vertex.
    pub fn try_push_forward(&self, f: &Affine2) -> Result<Polygon, ShapeError> {
        let out = self.push_forward(f);
        match out
            .points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            Some(index) => Err(ShapeError::NonFinite { index }),
            None => Ok(out),
        }
    }

    /// Same as `push_forward`, but keep a caller-chosen quadrant tag.
    pub(crate) fn push_forward_into(&self, f: &Affine2, quadrant: Quadrant) -> Polygon {
        Polygon {
            quadrant,
            ..self.push_forward(f)
        }
    }

    /// Closed edge list `(p_i, p_{i+1})`, wrapping at the end.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.points.len();
        (0..n).map(move |k| (self.points[k], self.points[(k + 1) % n]))
    }
}

/// Round to the nearest integer (halves away from zero) and drop the sign of zero.
#[inline]
fn snap(p: Point) -> Point {
    Vector2::new(p.x.round() + 0.0, p.y.round() + 0.0)
}
