//! Error kinds raised by ship operations.
//!
//! Validation and lookup failures are terminal for the operation that
//! raised them; nothing is retried.

use thiserror::Error;

use crate::ship::ShipId;

#[derive(Debug, Error)]
pub enum ShipError {
    /// Malformed identifier, missing required field, out-of-range value or
    /// malformed date.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The operation targets an identifier that storage does not hold.
    #[error("Ship {0} not found")]
    NotFound(ShipId),

    /// The persistence backend failed (I/O, corrupt store file).
    #[error("Storage error: {0:#}")]
    Storage(#[source] anyhow::Error),
}

impl ShipError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        ShipError::InvalidInput(reason.into())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ShipError::InvalidInput(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ShipError::NotFound(_))
    }
}

impl From<anyhow::Error> for ShipError {
    fn from(err: anyhow::Error) -> Self {
        ShipError::Storage(err)
    }
}

pub type Result<T, E = ShipError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ShipError::invalid("speed out of range").to_string(),
            "Invalid input: speed out of range"
        );
        assert_eq!(ShipError::NotFound(42).to_string(), "Ship 42 not found");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(ShipError::invalid("x").is_invalid_input());
        assert!(!ShipError::invalid("x").is_not_found());
        assert!(ShipError::NotFound(1).is_not_found());
    }

    #[test]
    fn test_storage_from_anyhow() {
        let err: ShipError = anyhow::anyhow!("disk full").into();
        assert!(matches!(err, ShipError::Storage(_)));
        assert_eq!(err.to_string(), "Storage error: disk full");
    }
}
