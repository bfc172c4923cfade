use std::error::Error;
use std::fmt;

/// Errors returned by matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A dimension was zero, a source buffer was too short, or an
    /// operation received a released (sentinel) matrix.
    InvalidArgument { reason: &'static str },

    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::DimensionMismatch { left, right } => write!(
                f,
                "incompatible shapes: {}x{} and {}x{}",
                left.0, left.1, right.0, right.1
            ),
        }
    }
}

impl Error for MatrixError {}

/// Convenience alias used throughout `matcalc-core`.
pub type Result<T> = std::result::Result<T, MatrixError>;
