use std::fmt;

/// Errors surfaced while constructing colored points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PointError {
    /// Color is not in the registry consulted by `AdvancedPoint::new`.
    InvalidColor { color: String, allowed: Vec<String> },
    /// Color is not in the fixed palette accepted by `ColorPoint::new`.
    UnknownColor { color: String },
}

impl PointError {
    /// The rejected color name.
    pub fn color(&self) -> &str {
        match self {
            PointError::InvalidColor { color, .. } | PointError::UnknownColor { color } => color,
        }
    }
}

impl fmt::Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointError::InvalidColor { color, allowed } => write!(
                f,
                "invalid color {:?}, must be one of the {:?}",
                color, allowed
            ),
            PointError::UnknownColor { color } => {
                write!(f, "unknown color {:?} for a colored point", color)
            }
        }
    }
}

impl std::error::Error for PointError {}
