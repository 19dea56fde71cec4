use nalgebra::{matrix, Matrix2, Vector2};

/// 2D affine map: `x ↦ M x + t`.
///
/// Every rigid motion used here has entries of `M` in `{-1, 0, 1}`, so mapping
/// integer points gives integer points before the final snap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn linear(m: Matrix2<f64>) -> Self {
        Self {
            m,
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    /// Mirror over the x-axis: `(x, y) ↦ (x, -y)`.
    #[inline]
    pub fn mirror_x() -> Self {
        Self::linear(matrix![1.0, 0.0; 0.0, -1.0])
    }
    /// Mirror over the y-axis: `(x, y) ↦ (-x, y)`.
    #[inline]
    pub fn mirror_y() -> Self {
        Self::linear(matrix![-1.0, 0.0; 0.0, 1.0])
    }
    /// Quarter turn counter-clockwise about the origin: `(x, y) ↦ (-y, x)`.
    #[inline]
    pub fn quarter_ccw() -> Self {
        Self::linear(matrix![0.0, -1.0; 1.0, 0.0])
    }
    /// Quarter turn clockwise about the origin: `(x, y) ↦ (y, -x)`.
    #[inline]
    pub fn quarter_cw() -> Self {
        Self::linear(matrix![0.0, 1.0; -1.0, 0.0])
    }
    /// Half turn about the origin: `(x, y) ↦ (-x, -y)`.
    #[inline]
    pub fn half_turn() -> Self {
        Self::linear(-Matrix2::identity())
    }

    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }
    /// `self ∘ other`: apply `other` first.
    #[inline]
    pub fn compose(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }
    #[inline]
    pub fn inverse(&self) -> Option<Self> {
        self.m.try_inverse().map(|minv| Self {
            m: minv,
            t: -minv * self.t,
        })
    }
    #[inline]
    pub fn is_orientation_preserving(&self) -> bool {
        self.m.determinant() > 0.0
    }
    /// Distance-preserving iff `MᵀM = I`.
    pub fn is_isometry(&self) -> bool {
        (self.m.transpose() * self.m - Matrix2::identity()).amax() < 1e-12
    }

    /// Coordinate rule as printed in the rule panel, e.g. `(x, y) → (−y, x + 3)`.
    pub fn rule(&self) -> String {
        let row = |k: usize| coord_expr(self.m[(k, 0)], self.m[(k, 1)], self.t[k]);
        format!("(x, y) → ({}, {})", row(0), row(1))
    }
}

/// Render `a·x + b·y + t` with unicode minus signs and unit coefficients elided.
fn coord_expr(a: f64, b: f64, t: f64) -> String {
    let mut out = String::new();
    for (coef, var) in [(a, "x"), (b, "y")] {
        if coef == 0.0 {
            continue;
        }
        let mag = coef.abs();
        let body = if mag == 1.0 {
            var.to_string()
        } else {
            format!("{}{var}", fmt_num(mag))
        };
        push_term(&mut out, coef < 0.0, &body);
    }
    if t != 0.0 {
        push_term(&mut out, t < 0.0, &fmt_num(t.abs()));
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

fn push_term(out: &mut String, negative: bool, body: &str) {
    match (out.is_empty(), negative) {
        (true, false) => {}
        (true, true) => out.push('−'),
        (false, false) => out.push_str(" + "),
        (false, true) => out.push_str(" − "),
    }
    out.push_str(body);
}

/// Integers print without a fractional part.
pub(crate) fn fmt_num(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
