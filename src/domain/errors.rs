// ============================================================================
// Vector Errors
// Error types surfaced by vector construction and operations
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Why construction input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentError {
    /// The coordinate sequence had no elements
    Empty,
    /// The element at `index` could not be converted to a decimal
    NotNumeric { index: usize, cause: NumericError },
}

/// Errors that can occur when building or combining vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorError {
    /// Construction input was empty or not numeric
    InvalidArgument(ArgumentError),
    /// Operands have different dimensions
    DimensionMismatch { expected: usize, found: usize },
    /// An operand had zero magnitude where a direction is required
    DivisionByZero { operation: &'static str },
    /// Operation is only defined for another dimension
    UnsupportedDimension {
        operation: &'static str,
        dimension: usize,
    },
    /// Tolerance configuration is out of range
    InvalidTolerance(&'static str),
    /// Decimal arithmetic failed (overflow, bad scalar)
    Numeric(NumericError),
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::Empty => write!(f, "the coordinates must be nonempty"),
            ArgumentError::NotNumeric { index, cause } => {
                write!(f, "coordinate {} is not numeric: {}", index, cause)
            },
        }
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            VectorError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {}, found {}",
                expected, found
            ),
            VectorError::DivisionByZero { operation } => {
                write!(f, "{}: magnitude is zero", operation)
            },
            VectorError::UnsupportedDimension {
                operation,
                dimension,
            } => write!(
                f,
                "{} is not defined for {}-dimensional vectors",
                operation, dimension
            ),
            VectorError::InvalidTolerance(reason) => write!(f, "invalid tolerance: {}", reason),
            VectorError::Numeric(err) => write!(f, "numeric error: {}", err),
        }
    }
}

impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VectorError::InvalidArgument(ArgumentError::NotNumeric { cause, .. }) => Some(cause),
            VectorError::Numeric(err) => Some(err),
            _ => None,
        }
    }
}

impl From<NumericError> for VectorError {
    fn from(err: NumericError) -> Self {
        VectorError::Numeric(err)
    }
}

impl From<ArgumentError> for VectorError {
    fn from(err: ArgumentError) -> Self {
        VectorError::InvalidArgument(err)
    }
}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;
