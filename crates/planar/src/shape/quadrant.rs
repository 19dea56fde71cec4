use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use super::error::ShapeError;

/// One of the four open regions cut out by the axes, numbered 1–4
/// counter-clockwise from `(+,+)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quadrant {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::First,
        Quadrant::Second,
        Quadrant::Third,
        Quadrant::Fourth,
    ];

    /// Classify a point by the signs of its coordinates.
    ///
    /// Points on an axis fall back to a single coordinate: `x > 0 → 1`,
    /// `x < 0 → 2`, then `y < 0 → 3`, and everything left (including the
    /// origin and the positive y-axis) is 4.
    pub fn of(p: Vector2<f64>) -> Self {
        let (x, y) = (p.x, p.y);
        if x > 0.0 && y > 0.0 {
            Quadrant::First
        } else if x < 0.0 && y > 0.0 {
            Quadrant::Second
        } else if x < 0.0 && y < 0.0 {
            Quadrant::Third
        } else if x > 0.0 && y < 0.0 {
            Quadrant::Fourth
        } else if x > 0.0 {
            Quadrant::First
        } else if x < 0.0 {
            Quadrant::Second
        } else if y < 0.0 {
            Quadrant::Third
        } else {
            Quadrant::Fourth
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Sign pattern `(sx, sy)` of points strictly inside this quadrant.
    #[inline]
    pub fn sign(self) -> Vector2<f64> {
        match self {
            Quadrant::First => Vector2::new(1.0, 1.0),
            Quadrant::Second => Vector2::new(-1.0, 1.0),
            Quadrant::Third => Vector2::new(-1.0, -1.0),
            Quadrant::Fourth => Vector2::new(1.0, -1.0),
        }
    }

    /// The three other quadrants, ascending.
    pub fn others(self) -> [Quadrant; 3] {
        let mut out = [self; 3];
        let mut k = 0;
        for q in Self::ALL {
            if q != self {
                out[k] = q;
                k += 1;
            }
        }
        debug_assert_eq!(k, 3);
        out
    }

    /// Strict membership: both coordinates carry this quadrant's signs.
    #[inline]
    pub fn contains(self, p: Vector2<f64>) -> bool {
        let s = self.sign();
        p.x * s.x > 0.0 && p.y * s.y > 0.0
    }
}

impl TryFrom<u8> for Quadrant {
    type Error = ShapeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Quadrant::First),
            2 => Ok(Quadrant::Second),
            3 => Ok(Quadrant::Third),
            4 => Ok(Quadrant::Fourth),
            _ => Err(ShapeError::BadQuadrant { value }),
        }
    }
}

impl FromStr for Quadrant {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim();
        let t = t
            .strip_prefix('Q')
            .or_else(|| t.strip_prefix('q'))
            .unwrap_or(t);
        let value: u8 = t.parse().map_err(|_| ShapeError::parse("quadrant", s))?;
        Quadrant::try_from(value)
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}
