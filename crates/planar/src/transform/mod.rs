//! Rigid motions of polygons: translation, reflection, rotation about the origin.
//!
//! Every operation builds an `Affine2` and pushes the polygon forward through
//! it, which snaps coordinates to integers and re-tags the quadrant from the
//! first image vertex. Quadrant moves are the one exception: they keep the
//! target quadrant they were asked for.
//!
//! Rotations are always about the origin `(0, 0)`, never the shape's center,
//! so the rule is one of `(−y, x)`, `(y, −x)`, `(−x, −y)`.

mod affine;
mod rotation;

use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;
use rand::Rng;

use crate::gen::{random_other_quadrant, GridCfg};
use crate::shape::{Polygon, Quadrant, ShapeError};

pub use affine::Affine2;
use affine::fmt_num;
pub use rotation::{Rotation, RotationLabel};

/// Mirror line for a reflection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn affine(self) -> Affine2 {
        match self {
            Axis::X => Affine2::mirror_x(),
            Axis::Y => Affine2::mirror_y(),
        }
    }
}

impl FromStr for Axis {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" | "x-axis" => Ok(Axis::X),
            "y" | "y-axis" => Ok(Axis::Y),
            _ => Err(ShapeError::parse("axis", s)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

/// Reflect over an axis. The quadrant is recomputed from the first vertex.
pub fn reflect(poly: &Polygon, axis: Axis) -> Polygon {
    poly.push_forward(&axis.affine())
}

/// Rotate about the origin. The quadrant is recomputed from the first vertex.
pub fn rotate(poly: &Polygon, rotation: Rotation) -> Polygon {
    poly.push_forward(&rotation.affine())
}

/// Translate by an explicit vector. The quadrant is recomputed from the first vertex.
///
/// Fails with `ShapeError::NonFinite` when an image vertex is NaN or infinite.
pub fn translate(poly: &Polygon, vector: Vector2<f64>) -> Result<Polygon, ShapeError> {
    poly.try_push_forward(&Affine2::translation(vector))
}

/// Result of a quadrant move.
#[derive(Clone, Debug, PartialEq)]
pub struct Translation {
    pub polygon: Polygon,
    /// Vector actually applied, before snapping.
    pub vector: Vector2<f64>,
    pub from: Quadrant,
    pub to: Quadrant,
}

/// Move the polygon into a different, uniformly chosen quadrant.
///
/// The bounding-box centroid is sent to a random point of the target quadrant
/// such that the whole box fits in that quadrant's region of `cfg`. The
/// result is tagged with the target quadrant. Fails only when the box is
/// larger than a quadrant region, which generated shapes never are.
pub fn translate_to_random_quadrant<R: Rng + ?Sized>(
    poly: &Polygon,
    cfg: &GridCfg,
    rng: &mut R,
) -> Result<Translation, ShapeError> {
    let from = poly.quadrant();
    let to = random_other_quadrant(from, rng);
    debug_assert_ne!(from, to);
    let bbox = poly.bbox();
    let (w, h) = (bbox.width(), bbox.height());
    let corner = cfg.place_box(to, w, h, rng)?;
    let target = corner + Vector2::new(w, h) * 0.5;
    let vector = target - bbox.center();
    let polygon = poly.push_forward_into(&Affine2::translation(vector), to);
    Ok(Translation {
        polygon,
        vector,
        from,
        to,
    })
}

/// A transform request, as the caller narrates it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate(Vector2<f64>),
    Reflect(Axis),
    Rotate(RotationLabel),
}

impl Transform {
    pub fn affine(&self) -> Affine2 {
        match *self {
            Transform::Translate(v) => Affine2::translation(v),
            Transform::Reflect(axis) => axis.affine(),
            Transform::Rotate(label) => label.rotation().affine(),
        }
    }

    /// Only translations can fail, see [`translate`].
    pub fn apply(&self, poly: &Polygon) -> Result<Polygon, ShapeError> {
        match *self {
            Transform::Translate(v) => translate(poly, v),
            Transform::Reflect(axis) => Ok(reflect(poly, axis)),
            Transform::Rotate(label) => Ok(rotate(poly, label.rotation())),
        }
    }

    /// Coordinate rule, e.g. `(x, y) → (x + 3, y − 2)`.
    pub fn rule(&self) -> String {
        self.affine().rule()
    }

    /// Plain-English name of the motion.
    pub fn describe(&self) -> String {
        match *self {
            Transform::Translate(v) => format!(
                "translation by ⟨{}, {}⟩",
                fmt_signed(v.x),
                fmt_signed(v.y)
            ),
            Transform::Reflect(axis) => format!("reflection over the {axis}-axis"),
            Transform::Rotate(label) => match label.clockwise() {
                Some(true) => format!("rotation {}° clockwise about the origin", label.degrees()),
                Some(false) => format!(
                    "rotation {}° counterclockwise about the origin",
                    label.degrees()
                ),
                None => format!("rotation {}° about the origin", label.degrees()),
            },
        }
    }
}

fn fmt_signed(v: f64) -> String {
    if v < 0.0 {
        format!("−{}", fmt_num(-v))
    } else {
        fmt_num(v)
    }
}

#[cfg(test)]
mod tests;
