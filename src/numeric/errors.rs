// ============================================================================
// Numeric Errors
// Error types shared by the amount validation and formatting helpers
// ============================================================================

use std::fmt;

/// Errors raised by the amount guard layer.
///
/// Public functions never propagate these: they log the error with a
/// function-qualified message and return the documented fallback value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Missing, blank or non-numeric amount argument
    InvalidInput,
    /// Out-of-domain configuration (decimal count, shift factor, bounds)
    InvalidParameter,
    /// Result not representable at a supported scale
    OutOfRange,
    /// Atomic-unit record does not round-trip to its original value
    Inconsistency,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::InvalidInput => {
                write!(f, "invalid input: missing, blank or non-numeric amount")
            },
            NumericError::InvalidParameter => {
                write!(f, "invalid parameter: value outside the supported domain")
            },
            NumericError::OutOfRange => {
                write!(f, "out of range: result not representable at a supported scale")
            },
            NumericError::Inconsistency => {
                write!(f, "inconsistency: atomic unit does not match its original value")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for guard-layer operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::InvalidInput.to_string(),
            "invalid input: missing, blank or non-numeric amount"
        );
        assert_eq!(
            NumericError::Inconsistency.to_string(),
            "inconsistency: atomic unit does not match its original value"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::InvalidInput, NumericError::InvalidInput);
        assert_ne!(NumericError::InvalidInput, NumericError::OutOfRange);
    }
}
