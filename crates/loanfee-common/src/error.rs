//! Error types for LoanFee
//!
//! Provides a unified error type and the fee-domain error variants

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type alias using LoanFeeError
pub type Result<T> = std::result::Result<T, LoanFeeError>;

/// Unified error type for LoanFee operations
#[derive(Debug, Error)]
pub enum LoanFeeError {
    // Fee calculation errors
    #[error("Fee error: {0}")]
    Fee(#[from] FeeError),

    // Fee table source errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    // Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl LoanFeeError {
    /// Whether the error is a rejection of the caller's input
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            LoanFeeError::Fee(FeeError::UnrecognizedTerm { .. })
                | LoanFeeError::Fee(FeeError::UnrecognizedAmount { .. })
        )
    }
}

/// Fee calculation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeError {
    #[error("Unrecognised loan term provided: {term} months")]
    UnrecognizedTerm { term: u32 },

    #[error("Unrecognised loan amount provided: {amount}")]
    UnrecognizedAmount { amount: Decimal },

    #[error("Invalid fee table: {0}")]
    InvalidFeeTable(String),
}

// Fee table documents are JSON
impl From<serde_json::Error> for LoanFeeError {
    fn from(err: serde_json::Error) -> Self {
        LoanFeeError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_error_display() {
        let err = LoanFeeError::Fee(FeeError::UnrecognizedTerm { term: 37 });
        assert!(err.to_string().contains("37 months"));

        let err = LoanFeeError::Fee(FeeError::UnrecognizedAmount {
            amount: dec!(2750000),
        });
        assert!(err.to_string().contains("2750000"));
    }

    #[test]
    fn test_invalid_input_classification() {
        assert!(LoanFeeError::from(FeeError::UnrecognizedTerm { term: 6 }).is_invalid_input());
        assert!(!LoanFeeError::Storage("missing".to_string()).is_invalid_input());
        assert!(
            !LoanFeeError::from(FeeError::InvalidFeeTable("empty".to_string())).is_invalid_input()
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LoanFeeError = json.into();
        assert!(matches!(err, LoanFeeError::Serialization(_)));
    }
}
