use core::fmt;

/// All errors returned by `steplab-core`.
///
/// Every failure mode is reported as data; no routine in this crate panics
/// on bad numeric input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EngineError {
    /// The operation is only implemented for a specific size
    /// (eigen/SVD are 2x2 only, cross products are 3-D only).
    UnsupportedSize {
        op: &'static str,
        required: &'static str,
    },

    /// A square matrix was required.
    NotSquare { rows: usize, cols: usize },

    /// The matrix is singular (|det| < 1e-10) and cannot be inverted.
    /// Carries the computed determinant for display.
    SingularMatrix { det: f64 },

    /// Elimination hit a zero pivot: the system has no unique solution.
    SingularSystem,

    /// The zero vector cannot be normalized or given a direction.
    ZeroVector,

    /// Two vectors (or a matrix and a vector) have incompatible lengths.
    DimensionMismatch { expected: usize, got: usize },

    /// Two matrices have incompatible shapes for the requested operation.
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A matrix could not be built from the given data.
    InvalidShape { reason: &'static str },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize { op, required } => {
                write!(f, "{op} is only supported for {required}")
            }
            Self::NotSquare { rows, cols } => {
                write!(f, "operation requires a square matrix, got {rows}x{cols}")
            }
            Self::SingularMatrix { det } => {
                write!(f, "matrix is singular (det = {det}); inverse does not exist")
            }
            Self::SingularSystem => {
                write!(f, "zero pivot encountered; the system has no unique solution")
            }
            Self::ZeroVector => write!(f, "cannot normalize the zero vector"),
            Self::DimensionMismatch { expected, got } => {
                write!(f, "dimension mismatch: expected {expected}, got {got}")
            }
            Self::ShapeMismatch { left, right } => {
                write!(
                    f,
                    "shape mismatch: {}x{} vs {}x{}",
                    left.0, left.1, right.0, right.1
                )
            }
            Self::InvalidShape { reason } => write!(f, "invalid shape: {reason}"),
        }
    }
}

impl std::error::Error for EngineError {}

/// Convenience alias used throughout `steplab-core`.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unsupported() {
        let e = EngineError::UnsupportedSize {
            op: "eigendecomposition",
            required: "2x2 matrices",
        };
        assert_eq!(
            e.to_string(),
            "eigendecomposition is only supported for 2x2 matrices"
        );
    }

    #[test]
    fn test_display_singular() {
        let e = EngineError::SingularMatrix { det: 0.0 };
        assert!(e.to_string().contains("singular"));
    }

    #[test]
    fn test_display_shape_mismatch() {
        let e = EngineError::ShapeMismatch {
            left: (2, 3),
            right: (4, 5),
        };
        assert_eq!(e.to_string(), "shape mismatch: 2x3 vs 4x5");
    }
}
