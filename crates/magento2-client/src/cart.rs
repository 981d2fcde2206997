//! # Cart Resource
//!
//! One remote shopping cart (guest or customer) and the operations that
//! mutate it. Every method performs exactly one remote round-trip (or N
//! sequential ones) and returns the failure to the caller unretried.
//!
//! The cached `detailed` snapshot is stale until explicitly refreshed; a
//! mutating call only refreshes it where documented.

use crate::api::ApiClient;
use crate::order::Order;
use crate::routes;
use crate::util::{parse_json, trim_surrounding_quotes};
use magento2_core::{
    Address, AddressInformation, Carrier, DetailedCart, Item, MagentoError, MagentoResult,
    PaymentMethod, PaymentMethodCode,
};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A remote shopping cart identified by its quote ID
#[derive(Debug, Clone)]
pub struct Cart {
    route: String,
    quote_id: String,
    detailed: DetailedCart,
    client: ApiClient,
}

#[derive(Serialize)]
struct CartItemPayload<'a> {
    #[serde(rename = "cartItem")]
    cart_item: &'a Item,
}

#[derive(Serialize)]
struct AddressPayload<'a> {
    address: &'a Address,
}

#[derive(Serialize)]
struct AddressInformationPayload<'a> {
    #[serde(rename = "addressInformation")]
    address_information: &'a AddressInformation,
}

#[derive(Serialize)]
struct PlaceOrderPayload {
    #[serde(rename = "paymentMethod")]
    payment_method: PaymentMethodCode,
}

impl Cart {
    pub(crate) fn new(route: String, quote_id: String, client: ApiClient) -> Self {
        Self {
            route,
            quote_id,
            detailed: DetailedCart::default(),
            client,
        }
    }

    /// The cart's fully-qualified endpoint route
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The remote quote ID this cart is bound to
    pub fn quote_id(&self) -> &str {
        &self.quote_id
    }

    /// The cached snapshot of remote state.
    ///
    /// Stale until `update_self` (or a refreshing mutation) has run.
    pub fn detailed(&self) -> &DetailedCart {
        &self.detailed
    }

    /// Fetch the current remote cart state
    #[instrument(skip(self), fields(quote_id = %self.quote_id))]
    pub async fn get_details(&self) -> MagentoResult<DetailedCart> {
        let body = self.client.get_text(&self.route).await?;
        parse_json(&body, "detailed cart")
    }

    /// Refresh the cached snapshot, replacing it wholesale
    pub async fn update_self(&mut self) -> MagentoResult<()> {
        self.detailed = self.get_details().await?;
        Ok(())
    }

    /// Add items to the cart, one POST per item in input order.
    ///
    /// The cart's quote ID is injected into each item before submission.
    /// Stops at the first failure; items before the failing one are
    /// already committed remotely. On full success the snapshot is
    /// refreshed.
    #[instrument(skip(self, items), fields(quote_id = %self.quote_id, count = items.len()))]
    pub async fn add_items(&mut self, items: Vec<Item>) -> MagentoResult<()> {
        let endpoint = format!("{}{}", self.route, routes::CART_ITEMS);

        for mut item in items {
            item.quote_id = self.quote_id.clone();
            debug!("Adding item sku={} qty={}", item.sku, item.qty);
            self.client
                .post_json(&endpoint, &CartItemPayload { cart_item: &item })
                .await?;
        }

        self.update_self().await
    }

    /// Estimate available shipping carriers for a destination address.
    ///
    /// An empty list on a successful response is an error: the cart
    /// cannot be shipped to that address.
    #[instrument(skip(self, address), fields(quote_id = %self.quote_id))]
    pub async fn estimate_shipping_carrier(
        &self,
        address: Address,
    ) -> MagentoResult<Vec<Carrier>> {
        let endpoint = format!("{}{}", self.route, routes::CART_SHIPPING_COSTS);
        let body = self
            .client
            .post_json(&endpoint, &AddressPayload { address: &address })
            .await?;

        let carriers: Vec<Carrier> = parse_json(&body, "shipping carriers")?;
        if carriers.is_empty() {
            return Err(MagentoError::NoCarrierAvailable);
        }

        Ok(carriers)
    }

    /// Submit the selected shipping address and method, then refresh
    #[instrument(skip(self, address_information), fields(quote_id = %self.quote_id))]
    pub async fn add_shipping_information(
        &mut self,
        address_information: AddressInformation,
    ) -> MagentoResult<()> {
        let endpoint = format!("{}{}", self.route, routes::CART_SHIPPING_INFORMATION);
        self.client
            .post_json(
                &endpoint,
                &AddressInformationPayload {
                    address_information: &address_information,
                },
            )
            .await?;

        self.update_self().await
    }

    /// List the payment methods available for this cart.
    ///
    /// An empty list on a successful response is an error: the order
    /// could never be placed.
    #[instrument(skip(self), fields(quote_id = %self.quote_id))]
    pub async fn estimate_payment_methods(&self) -> MagentoResult<Vec<PaymentMethod>> {
        let endpoint = format!("{}{}", self.route, routes::CART_PAYMENT_METHODS);
        let body = self.client.get_text(&endpoint).await?;

        let methods: Vec<PaymentMethod> = parse_json(&body, "payment methods")?;
        if methods.is_empty() {
            return Err(MagentoError::NoPaymentMethodAvailable);
        }

        Ok(methods)
    }

    /// Place the order.
    ///
    /// The response body is the new order ID, quoted or raw depending on
    /// the Magento version. Returns an `Order` bound to its own route;
    /// the order holds no back-reference to this cart.
    #[instrument(skip(self, payment_method), fields(quote_id = %self.quote_id))]
    pub async fn create_order(&self, payment_method: &PaymentMethod) -> MagentoResult<Order> {
        let endpoint = format!("{}{}", self.route, routes::CART_PLACE_ORDER);
        let payload = PlaceOrderPayload {
            payment_method: PaymentMethodCode::from(payment_method),
        };

        let body = self.client.put_json(&endpoint, &payload).await?;

        let order_id_str = trim_surrounding_quotes(&body);
        let order_id: i64 = order_id_str
            .parse()
            .map_err(|_| MagentoError::OrderCreation { body: body.clone() })?;

        info!("Placed order: id={}", order_id);

        Ok(Order::new(
            order_id,
            format!("{}/{}", self.client.route(routes::ORDERS), order_id),
            self.client.clone(),
        ))
    }

    /// Delete a single line item by its item ID
    #[instrument(skip(self), fields(quote_id = %self.quote_id))]
    pub async fn delete_item(&self, item_id: i64) -> MagentoResult<()> {
        let endpoint = format!("{}{}/{}", self.route, routes::CART_ITEMS, item_id);
        self.client.delete(&endpoint).await?;
        Ok(())
    }

    /// Empty the cart: refresh, then delete every item in snapshot order.
    ///
    /// Aborts on the first deletion failure, leaving the remaining items
    /// undeleted. No rollback.
    #[instrument(skip(self), fields(quote_id = %self.quote_id))]
    pub async fn delete_all_items(&mut self) -> MagentoResult<()> {
        self.update_self().await?;

        for item_id in self.detailed.item_ids() {
            self.delete_item(item_id).await?;
        }

        Ok(())
    }
}
