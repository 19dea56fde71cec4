use std::fmt;
use std::str::FromStr;

use super::affine::Affine2;
use crate::shape::ShapeError;

/// The three distinct coordinate formulas for rotations about the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// `(x, y) → (−y, x)`
    Ccw90,
    /// `(x, y) → (y, −x)`
    Cw90,
    /// `(x, y) → (−x, −y)`
    Half,
}

impl Rotation {
    pub fn affine(self) -> Affine2 {
        match self {
            Rotation::Ccw90 => Affine2::quarter_ccw(),
            Rotation::Cw90 => Affine2::quarter_cw(),
            Rotation::Half => Affine2::half_turn(),
        }
    }

    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::Ccw90 => Rotation::Cw90,
            Rotation::Cw90 => Rotation::Ccw90,
            Rotation::Half => Rotation::Half,
        }
    }
}

/// How a rotation is narrated.
///
/// Labels are decorative: `Ccw90` and `Cw270` share one formula, as do `Cw90`
/// and `Ccw270`. Callers that cycle through labels for narration keep the
/// cursor themselves and advance it with [`RotationLabel::next`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationLabel {
    Ccw90,
    Cw90,
    Ccw270,
    Cw270,
    Half,
}

impl RotationLabel {
    /// Narration order for quarter-turn labels.
    pub const CYCLE: [RotationLabel; 4] = [
        RotationLabel::Ccw90,
        RotationLabel::Cw90,
        RotationLabel::Ccw270,
        RotationLabel::Cw270,
    ];

    /// Underlying coordinate formula.
    pub fn rotation(self) -> Rotation {
        match self {
            RotationLabel::Ccw90 | RotationLabel::Cw270 => Rotation::Ccw90,
            RotationLabel::Cw90 | RotationLabel::Ccw270 => Rotation::Cw90,
            RotationLabel::Half => Rotation::Half,
        }
    }

    /// Next label in `CYCLE`. `Half` is not part of the cycle and restarts it.
    pub fn next(self) -> RotationLabel {
        match self {
            RotationLabel::Ccw90 => RotationLabel::Cw90,
            RotationLabel::Cw90 => RotationLabel::Ccw270,
            RotationLabel::Ccw270 => RotationLabel::Cw270,
            RotationLabel::Cw270 | RotationLabel::Half => RotationLabel::Ccw90,
        }
    }

    pub fn degrees(self) -> u16 {
        match self {
            RotationLabel::Ccw90 | RotationLabel::Cw90 => 90,
            RotationLabel::Ccw270 | RotationLabel::Cw270 => 270,
            RotationLabel::Half => 180,
        }
    }

    /// `None` for the half turn, which has no direction.
    pub fn clockwise(self) -> Option<bool> {
        match self {
            RotationLabel::Cw90 | RotationLabel::Cw270 => Some(true),
            RotationLabel::Ccw90 | RotationLabel::Ccw270 => Some(false),
            RotationLabel::Half => None,
        }
    }

    fn token(self) -> &'static str {
        match self {
            RotationLabel::Ccw90 => "90ccw",
            RotationLabel::Cw90 => "90cw",
            RotationLabel::Ccw270 => "270ccw",
            RotationLabel::Cw270 => "270cw",
            RotationLabel::Half => "180",
        }
    }
}

impl From<Rotation> for RotationLabel {
    fn from(r: Rotation) -> Self {
        match r {
            Rotation::Ccw90 => RotationLabel::Ccw90,
            Rotation::Cw90 => RotationLabel::Cw90,
            Rotation::Half => RotationLabel::Half,
        }
    }
}

impl FromStr for RotationLabel {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let lower = lower.trim_end_matches('°');
        [
            RotationLabel::Ccw90,
            RotationLabel::Cw90,
            RotationLabel::Ccw270,
            RotationLabel::Cw270,
            RotationLabel::Half,
        ]
        .into_iter()
        .find(|l| l.token() == lower)
        .ok_or_else(|| ShapeError::parse("rotation", s))
    }
}

impl fmt::Display for RotationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
