//! Small response-body helpers.

use magento2_core::{MagentoError, MagentoResult};
use serde::de::DeserializeOwned;

/// Parse a response body into the expected type, naming the payload in
/// the error for caller diagnosis.
pub(crate) fn parse_json<T: DeserializeOwned>(body: &str, what: &str) -> MagentoResult<T> {
    serde_json::from_str(body)
        .map_err(|e| MagentoError::Serialization(format!("Failed to parse {what}: {e}")))
}

/// Strip one pair of surrounding double quotes, if present.
///
/// Several Magento endpoints answer with a bare JSON string (the guest
/// cart ID, the admin token, the placed order ID); depending on version
/// the value arrives quoted or raw.
pub(crate) fn trim_surrounding_quotes(body: &str) -> &str {
    let body = body.trim();
    let body = body.strip_prefix('"').unwrap_or(body);
    body.strip_suffix('"').unwrap_or(body)
}
