//! Random shapes inside a quadrant, and random quadrant targets.
//!
//! Model
//! - The plane is a square grid `[-extent, extent]²`. The region of a quadrant
//!   keeps a `margin` away from both axes, so nothing the generator draws ever
//!   lies on an axis.
//! - Width and height are integer draws in `[size_min, size_max]`; the anchor
//!   (bottom-left corner) is an integer draw that keeps the whole box inside
//!   the region. Vertex offsets then depend on the shape kind.
//! - The random source is passed in by the caller. Seeded `StdRng`s replay
//!   exactly.
//!
//! Code cross-refs: `Polygon`, `transform::translate_to_random_quadrant`

use nalgebra::Vector2;
use rand::Rng;

use crate::shape::{Point, Polygon, Quadrant, ShapeError, ShapeKind};

/// Narrowest trapezoid base that still admits an integer inset `0 < i < w/2`.
const TRAPEZOID_MIN_WIDTH: i64 = 3;

/// Grid configuration, in grid units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridCfg {
    /// Half-size of the visible grid; coordinates stay within `[-extent, extent]`.
    pub extent: i64,
    /// Distance kept from both axes.
    pub margin: i64,
    pub size_min: i64,
    pub size_max: i64,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            extent: 10,
            margin: 1,
            size_min: 2,
            size_max: 4,
        }
    }
}

impl GridCfg {
    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.margin < 1 {
            return Err(ShapeError::invalid("margin must be >= 1"));
        }
        if self.size_min < 1 {
            return Err(ShapeError::invalid("size_min must be >= 1"));
        }
        if self.size_min > self.size_max {
            return Err(ShapeError::invalid("size_min <= size_max required"));
        }
        let widest = self.size_max.max(TRAPEZOID_MIN_WIDTH);
        let room = self.extent.checked_sub(self.margin).unwrap_or(i64::MIN);
        if room < widest {
            return Err(ShapeError::invalid(format!(
                "quadrant region {}..={} cannot hold a shape of size {widest}",
                self.margin, self.extent
            )));
        }
        Ok(())
    }

    /// Closed region of a quadrant as `(min corner, max corner)`.
    pub fn region(&self, q: Quadrant) -> (Point, Point) {
        let (lo, hi) = (self.margin as f64, self.extent as f64);
        let s = q.sign();
        let span = |sign: f64| if sign > 0.0 { (lo, hi) } else { (-hi, -lo) };
        let (x0, x1) = span(s.x);
        let (y0, y1) = span(s.y);
        (Vector2::new(x0, y0), Vector2::new(x1, y1))
    }

    /// Draw an integer bottom-left corner for a `width × height` box so that the
    /// whole box lies in the region of `q`.
    pub fn place_box<R: Rng + ?Sized>(
        &self,
        q: Quadrant,
        width: f64,
        height: f64,
        rng: &mut R,
    ) -> Result<Point, ShapeError> {
        let (lo, hi) = self.region(q);
        let x_range = (lo.x.ceil() as i64, (hi.x - width).floor() as i64);
        let y_range = (lo.y.ceil() as i64, (hi.y - height).floor() as i64);
        if x_range.0 > x_range.1 || y_range.0 > y_range.1 || !(width >= 0.0 && height >= 0.0) {
            return Err(ShapeError::DoesNotFit { width, height });
        }
        let x = rng.gen_range(x_range.0..=x_range.1);
        let y = rng.gen_range(y_range.0..=y_range.1);
        Ok(Vector2::new(x as f64, y as f64))
    }
}

/// Uniform draw among the three quadrants other than `current`.
pub fn random_other_quadrant<R: Rng + ?Sized>(current: Quadrant, rng: &mut R) -> Quadrant {
    current.others()[rng.gen_range(0..3)]
}

/// Uniform draw over all shape kinds.
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> ShapeKind {
    ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
}

/// Draw a shape of `kind` (or a random kind) that lies entirely in `quadrant`.
///
/// Vertices run counter-clockwise from the bottom-left corner:
/// - rectangle/square: the four box corners;
/// - triangle: both bottom corners, then the midpoint of the top edge;
/// - trapezoid: both bottom corners, then the top edge inset by `i` from
///   each side, `0 < i < w/2`, so only the top and bottom are parallel.
pub fn generate<R: Rng + ?Sized>(
    cfg: &GridCfg,
    quadrant: Quadrant,
    kind: Option<ShapeKind>,
    rng: &mut R,
) -> Result<Polygon, ShapeError> {
    cfg.validate()?;
    let kind = match kind {
        Some(k) => k,
        None => random_kind(rng),
    };
    let (w, h) = match kind {
        ShapeKind::Square => {
            let s = rng.gen_range(cfg.size_min..=cfg.size_max);
            (s, s)
        }
        ShapeKind::Trapezoid => {
            let lo = cfg.size_min.max(TRAPEZOID_MIN_WIDTH);
            let hi = cfg.size_max.max(lo);
            (
                rng.gen_range(lo..=hi),
                rng.gen_range(cfg.size_min..=cfg.size_max),
            )
        }
        ShapeKind::Triangle | ShapeKind::Rectangle => (
            rng.gen_range(cfg.size_min..=cfg.size_max),
            rng.gen_range(cfg.size_min..=cfg.size_max),
        ),
    };
    let inset = match kind {
        ShapeKind::Trapezoid => rng.gen_range(1..=(w - 1) / 2) as f64,
        _ => 0.0,
    };
    let (w, h) = (w as f64, h as f64);
    let a = cfg.place_box(quadrant, w, h, rng)?;
    let p = |dx: f64, dy: f64| Vector2::new(a.x + dx, a.y + dy);
    let points = match kind {
        ShapeKind::Rectangle | ShapeKind::Square => {
            vec![p(0.0, 0.0), p(w, 0.0), p(w, h), p(0.0, h)]
        }
        ShapeKind::Triangle => vec![p(0.0, 0.0), p(w, 0.0), p(w / 2.0, h)],
        ShapeKind::Trapezoid => vec![p(0.0, 0.0), p(w, 0.0), p(w - inset, h), p(inset, h)],
    };
    Ok(Polygon::snapped(points, kind, quadrant))
}
