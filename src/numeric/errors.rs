// ============================================================================
// Numeric Errors
// Error types for scalar conversion and decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur while converting or combining scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the decimal range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input string or value is invalid
    InvalidInput,
    /// Floating-point input was NaN or infinite
    NotFinite,
    /// Square root of a negative value
    NegativeSqrt,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NotFinite => write!(f, "non-finite input: NaN or infinity"),
            NumericError::NegativeSqrt => write!(f, "square root of a negative value"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: result exceeded decimal range"
        );
        assert_eq!(NumericError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumericError::NotFinite.to_string(),
            "non-finite input: NaN or infinity"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::InvalidInput);
    }
}
