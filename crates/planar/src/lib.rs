//! Rigid motions of small polygons on a quadrant grid.
//!
//! Layout
//! - `shape`: points, polygons, shape kinds, quadrants, bounding boxes.
//! - `transform`: affine maps (translation, reflection, rotation about the
//!   origin) and their narration.
//! - `gen`: random shapes inside a quadrant and random quadrant moves.
//! - `session`: explicit "current shape" container with history and undo.
//!
//! API Policy
//! - Every transform is a pure function: it takes `&Polygon` and returns a new
//!   `Polygon`. Nothing is mutated in place and nothing is global.
//! - Randomness is always injected (`R: rand::Rng`), so seeded runs replay.

pub mod gen;
pub mod session;
pub mod shape;
pub mod transform;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{generate, random_other_quadrant, GridCfg};
    pub use crate::session::{Session, Step};
    pub use crate::shape::{
        vertex_label, Bbox, Point, Polygon, Quadrant, ShapeError, ShapeKind,
    };
    pub use crate::transform::{
        reflect, rotate, translate, translate_to_random_quadrant, Affine2, Axis, Rotation,
        RotationLabel, Transform, Translation,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
