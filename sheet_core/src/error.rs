//! Errors raised by validation, the engine and the service layer

use crate::character::CharacterId;
use crate::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SheetError {
    /// Malformed or out-of-range request amount. Nothing was changed.
    #[error("{0}")]
    InvalidArgument(String),

    /// Referenced character does not exist. Nothing was changed.
    #[error("character {0} not found")]
    NotFound(CharacterId),

    /// Hit point arithmetic left the representable range
    #[error("arithmetic overflow during {operation} of {amount}")]
    ArithmeticOverflow {
        operation: &'static str,
        amount: u32,
    },

    #[error("storage error: {0}")]
    Storage(#[from] StoreError),
}

impl SheetError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        SheetError::InvalidArgument(message.into())
    }

    /// Whether the caller sent a bad request (as opposed to a server fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, SheetError::InvalidArgument(_) | SheetError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = SheetError::invalid_argument("Heal amount must be positive.");
        assert_eq!(err.to_string(), "Heal amount must be positive.");

        let err = SheetError::NotFound(CharacterId(42));
        assert_eq!(err.to_string(), "character 42 not found");

        let err = SheetError::ArithmeticOverflow {
            operation: "vulnerability doubling",
            amount: 7,
        };
        assert!(err.to_string().contains("vulnerability doubling"));
    }

    #[test]
    fn test_client_error_classification() {
        assert!(SheetError::invalid_argument("x").is_client_error());
        assert!(SheetError::NotFound(CharacterId(1)).is_client_error());
        assert!(!SheetError::ArithmeticOverflow {
            operation: "healing",
            amount: 1
        }
        .is_client_error());
        assert!(!SheetError::from(StoreError::LockPoisoned).is_client_error());
    }
}
