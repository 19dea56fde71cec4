//! Explicit "current shape" container for a practice session.
//!
//! The engine itself is stateless. A session threads the most recent polygon
//! through successive transforms, remembers each step for narration and undo,
//! and owns the rotation-label cursor (90ccw → 90cw → 270ccw → 270cw).

use rand::Rng;

use crate::gen::{generate, GridCfg};
use crate::shape::{vertex_label, Polygon, Quadrant, ShapeError, ShapeKind};
use crate::transform::{
    reflect, rotate, translate_to_random_quadrant, Axis, RotationLabel, Transform,
};

/// One applied transform with the shapes on either side of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub transform: Transform,
    pub before: Polygon,
    pub after: Polygon,
}

impl Step {
    /// Quadrant change as `(before, after)`.
    pub fn quadrants(&self) -> (Quadrant, Quadrant) {
        (self.before.quadrant(), self.after.quadrant())
    }
}

#[derive(Clone, Debug)]
pub struct Session {
    current: Polygon,
    history: Vec<Step>,
    cursor: RotationLabel,
}

impl Session {
    pub fn new(polygon: Polygon) -> Self {
        Self {
            current: polygon,
            history: Vec::new(),
            cursor: RotationLabel::Ccw90,
        }
    }

    /// Start from a freshly generated shape.
    pub fn generate<R: Rng + ?Sized>(
        cfg: &GridCfg,
        quadrant: Quadrant,
        kind: Option<ShapeKind>,
        rng: &mut R,
    ) -> Result<Self, ShapeError> {
        Ok(Self::new(generate(cfg, quadrant, kind, rng)?))
    }

    #[inline]
    pub fn current(&self) -> &Polygon {
        &self.current
    }
    #[inline]
    pub fn history(&self) -> &[Step] {
        &self.history
    }
    /// Label the next quarter-turn will be narrated with.
    #[inline]
    pub fn cursor(&self) -> RotationLabel {
        self.cursor
    }
    /// Prime marks on the current vertex labels (one per applied step).
    #[inline]
    pub fn primes(&self) -> usize {
        self.history.len()
    }

    /// Vertex labels of the current shape, e.g. `A′ B′ C′`.
    pub fn labels(&self) -> Vec<String> {
        (0..self.current.points().len())
            .map(|i| vertex_label(i, self.primes()))
            .collect()
    }

    /// Apply any transform. On error the session is left unchanged.
    pub fn apply(&mut self, transform: Transform) -> Result<&Step, ShapeError> {
        let after = transform.apply(&self.current)?;
        Ok(self.push(transform, after))
    }

    pub fn reflect(&mut self, axis: Axis) -> &Step {
        let after = reflect(&self.current, axis);
        self.push(Transform::Reflect(axis), after)
    }

    pub fn rotate(&mut self, label: RotationLabel) -> &Step {
        let after = rotate(&self.current, label.rotation());
        self.push(Transform::Rotate(label), after)
    }

    /// Rotate with the cursor label, then advance the cursor.
    pub fn rotate_next(&mut self) -> &Step {
        let label = self.cursor;
        self.cursor = label.next();
        self.rotate(label)
    }

    /// Move to a random other quadrant; the step records the vector applied.
    pub fn translate_random<R: Rng + ?Sized>(
        &mut self,
        cfg: &GridCfg,
        rng: &mut R,
    ) -> Result<&Step, ShapeError> {
        let mv = translate_to_random_quadrant(&self.current, cfg, rng)?;
        Ok(self.push(Transform::Translate(mv.vector), mv.polygon))
    }

    /// Drop the last step and restore the shape it started from.
    pub fn undo(&mut self) -> Option<Step> {
        let step = self.history.pop()?;
        self.current = step.before.clone();
        Some(step)
    }

    fn push(&mut self, transform: Transform, after: Polygon) -> &Step {
        let before = std::mem::replace(&mut self.current, after.clone());
        self.history.push(Step {
            transform,
            before,
            after,
        });
        &self.history[self.history.len() - 1]
    }
}
