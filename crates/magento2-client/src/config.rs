//! # Store Configuration
//!
//! Scope configuration for a Magento2 instance: scheme, hostname and
//! store-view code. Secrets (tokens, admin credentials) are passed to the
//! `ApiClient` constructors and never held here.

use magento2_core::{MagentoError, MagentoResult};
use std::env;

/// Scope configuration for one Magento2 store view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// URL scheme ("https" or "http")
    pub scheme: String,

    /// Hostname, optionally with port (e.g. "shop.example.com")
    pub host_name: String,

    /// Store-view code (e.g. "default")
    pub store_code: String,
}

impl StoreConfig {
    /// Create a store config with explicit values
    pub fn new(
        scheme: impl Into<String>,
        host_name: impl Into<String>,
        store_code: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host_name: host_name.into(),
            store_code: store_code.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `MAGENTO_HOST`
    ///
    /// Optional env vars:
    /// - `MAGENTO_SCHEME` (default "https")
    /// - `MAGENTO_STORE_CODE` (default "default")
    pub fn from_env() -> MagentoResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let host_name = env::var("MAGENTO_HOST")
            .map_err(|_| MagentoError::Configuration("MAGENTO_HOST not set".to_string()))?;

        let scheme = env::var("MAGENTO_SCHEME").unwrap_or_else(|_| "https".to_string());
        let store_code = env::var("MAGENTO_STORE_CODE").unwrap_or_else(|_| "default".to_string());

        let config = Self::new(scheme, host_name, store_code);
        config.validate()?;
        Ok(config)
    }

    /// Validate the scope configuration
    pub fn validate(&self) -> MagentoResult<()> {
        if self.scheme != "https" && self.scheme != "http" {
            return Err(MagentoError::Configuration(format!(
                "MAGENTO_SCHEME must be 'https' or 'http', got '{}'",
                self.scheme
            )));
        }
        if self.host_name.is_empty() {
            return Err(MagentoError::Configuration(
                "MAGENTO_HOST must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// The fully-qualified base route every resource path is joined onto
    pub fn base_route(&self) -> String {
        format!(
            "{}://{}/rest/{}/V1",
            self.scheme, self.host_name, self.store_code
        )
    }
}
