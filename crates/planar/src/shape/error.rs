use std::fmt;

/// Error type shared by shape construction, configuration, and quadrant moves.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    TooFewVertices { got: usize },
    NonFinite { index: usize },
    BadQuadrant { value: u8 },
    DoesNotFit { width: f64, height: f64 },
    InvalidConfig { reason: String },
    Parse { what: &'static str, input: String },
}

impl ShapeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(what: &'static str, input: impl Into<String>) -> Self {
        Self::Parse {
            what,
            input: input.into(),
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { got } => {
                write!(f, "a polygon needs at least 3 vertices, got {got}")
            }
            Self::NonFinite { index } => write!(f, "vertex {index} has a non-finite coordinate"),
            Self::BadQuadrant { value } => write!(f, "quadrant must be 1..=4, got {value}"),
            Self::DoesNotFit { width, height } => write!(
                f,
                "a {width}x{height} bounding box does not fit inside a quadrant"
            ),
            Self::InvalidConfig { reason } => write!(f, "invalid grid config: {reason}"),
            Self::Parse { what, input } => write!(f, "cannot parse {what} from {input:?}"),
        }
    }
}

impl std::error::Error for ShapeError {}
