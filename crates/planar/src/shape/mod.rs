//! Polygons on the Cartesian plane, tagged with a kind and a quadrant.
//!
//! Conventions
//! - Vertex order is significant: it defines the edges and the labels
//!   `A, B, C, …` the renderer draws next to each corner.
//! - Coordinates are snapped to integers after generation and after every
//!   transform (`Polygon::push_forward`). The snap normalizes `-0.0` to `0.0`.
//! - The quadrant tag is derived from the first vertex, except for shapes fresh
//!   out of the generator or a quadrant move, where it is the requested target.
//!
//! Code cross-refs: `transform::Affine2`, `gen::generate`

mod error;
mod label;
mod quadrant;
mod types;

pub use error::ShapeError;
pub use label::vertex_label;
pub use quadrant::Quadrant;
pub use types::{Bbox, Point, Polygon, ShapeKind};

#[cfg(test)]
mod tests;
