//! # Order Resource
//!
//! The terminal artifact of a successful checkout. Constructed only by
//! `Cart::create_order`; immutable from this client's perspective.

use crate::api::ApiClient;
use magento2_core::MagentoResult;
use tracing::instrument;

/// A placed order on the remote Magento instance
#[derive(Debug, Clone)]
pub struct Order {
    /// Remote order ID
    pub id: i64,

    /// Fully-qualified endpoint route of this order
    pub route: String,

    client: ApiClient,
}

impl Order {
    pub(crate) fn new(id: i64, route: String, client: ApiClient) -> Self {
        Self { id, route, client }
    }

    /// Fetch the raw remote order document.
    ///
    /// The order schema varies heavily with installed modules, so the
    /// document is returned as-is rather than forced into a fixed type.
    #[instrument(skip(self), fields(order_id = self.id))]
    pub async fn get_details(&self) -> MagentoResult<serde_json::Value> {
        let body = self.client.get_text(&self.route).await?;
        crate::util::parse_json(&body, "order detail")
    }
}
