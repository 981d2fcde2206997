//! # Magento Error Types
//!
//! Typed error handling for the magento2-rs client.
//! All remote operations return `Result<T, MagentoError>`.

use thiserror::Error;

/// Core error type for all Magento API operations
#[derive(Debug, Error)]
pub enum MagentoError {
    /// Configuration errors (missing env vars, invalid store config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network/connection failure talking to the Magento instance
    #[error("Transport error: {0}")]
    Transport(String),

    /// The remote answered with a status >= 400.
    ///
    /// Status and raw body are carried separately so callers can branch
    /// on the code and still log the full diagnostic payload.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// Shipping estimation returned a syntactically valid but empty list
    #[error("No suitable shipping carrier available")]
    NoCarrierAvailable,

    /// Payment estimation returned a syntactically valid but empty list
    #[error("No suitable payment method available")]
    NoPaymentMethodAvailable,

    /// The order-placement response body could not be parsed as an order ID
    #[error("Could not extract order ID from response body: '{body}'")]
    OrderCreation { body: String },

    /// Response body did not match the expected JSON shape
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MagentoError {
    /// Returns the remote status code, if this error came from the remote
    pub fn status(&self) -> Option<u16> {
        match self {
            MagentoError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the remote rejected the request (status >= 400)
    pub fn is_remote(&self) -> bool {
        matches!(self, MagentoError::UnexpectedStatus { .. })
    }

    /// Returns true if the request never completed (connection-level failure)
    pub fn is_transport(&self) -> bool {
        matches!(self, MagentoError::Transport(_))
    }

    /// Returns true for business-empty results (no carriers / no payment methods)
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            MagentoError::NoCarrierAvailable | MagentoError::NoPaymentMethodAvailable
        )
    }
}

/// Result type alias for Magento API operations
pub type MagentoResult<T> = Result<T, MagentoError>;
