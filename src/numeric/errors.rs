// ============================================================================
// Numeric Errors
// Error types for digit extraction and reweighting operations
// ============================================================================

use std::fmt;

/// Errors that can occur while extracting a decimal expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Input value was zero or negative
    NonPositiveInput,
    /// Input value was NaN or infinite
    NotFinite,
    /// Integer part exceeded the digit-extraction range
    Overflow,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NonPositiveInput => {
                write!(f, "non-positive input: value must be greater than zero")
            },
            NumericError::NotFinite => {
                write!(f, "non-finite input: value must not be NaN or infinite")
            },
            NumericError::Overflow => write!(
                f,
                "overflow: integer part exceeded the digit-extraction range"
            ),
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
            NumericError::NonPositiveInput.to_string(),
            "non-positive input: value must be greater than zero"
        );
        assert_eq!(
            NumericError::NotFinite.to_string(),
            "non-finite input: value must not be NaN or infinite"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::NotFinite);
    }
}
