//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Only rejected inputs surface here. Removing or updating a product that is
/// not in the cart is a no-op, not an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(u32),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Validation error.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CommerceError {
    /// Whether this error is a rejected caller input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CommerceError::InvalidQuantity(_)
                | CommerceError::QuantityExceedsLimit(_, _)
                | CommerceError::ValidationError(_)
        )
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for CommerceError {
    fn from(e: toml::ser::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
