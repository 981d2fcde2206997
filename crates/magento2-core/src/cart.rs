//! # Cart Types
//!
//! Wire types for the Magento2 cart (quote) endpoints.
//! Field names follow Magento's snake_case JSON contract exactly.

use serde::{Deserialize, Serialize};

/// A line item within a cart.
///
/// When submitting a new item only `sku` and `qty` need to be set; the
/// cart injects its own `quote_id` before the request goes out, and
/// Magento assigns `item_id` on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Line item ID assigned by Magento (absent before creation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    /// Product SKU
    pub sku: String,

    /// Quantity
    pub qty: u32,

    /// Product name (denormalized, returned on cart detail)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Unit price (denormalized, returned on cart detail)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    /// Product type (e.g. "simple")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    /// Owning quote ID, injected by the cart before submission
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub quote_id: String,
}

impl Item {
    /// Create an item to be added to a cart
    pub fn new(sku: impl Into<String>, qty: u32) -> Self {
        Self {
            item_id: None,
            sku: sku.into(),
            qty,
            name: None,
            price: None,
            product_type: None,
            quote_id: String::new(),
        }
    }
}

/// A shipping/billing address, as accepted by the estimation endpoints.
///
/// Magento tolerates sparse addresses for shipping estimation; only the
/// geographic fields are required for a usable quote.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    /// Street lines
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub street: Vec<String>,

    /// City
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub city: String,

    /// Region display name (e.g. "Bavaria")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub region: String,

    /// Numeric region ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<i64>,

    /// Region code (e.g. "BY")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,

    /// Postal code
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub postcode: String,

    /// ISO country code (e.g. "DE")
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub country_id: String,

    /// Contact first name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,

    /// Contact last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Contact telephone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
}

/// A shipping option returned by `estimate-shipping-methods`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Carrier {
    /// Carrier code (e.g. "flatrate")
    pub carrier_code: String,

    /// Method code within the carrier (e.g. "flatrate")
    pub method_code: String,

    /// Carrier display title
    #[serde(default)]
    pub carrier_title: String,

    /// Method display title
    #[serde(default)]
    pub method_title: String,

    /// Shipping cost in store currency
    #[serde(default)]
    pub amount: f64,

    /// Shipping cost in base currency
    #[serde(default)]
    pub base_amount: f64,

    /// Whether the method is currently available
    #[serde(default)]
    pub available: bool,

    /// Cost excluding tax
    #[serde(default)]
    pub price_excl_tax: f64,

    /// Cost including tax
    #[serde(default)]
    pub price_incl_tax: f64,

    /// Error detail when the method is unavailable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

/// The full shipping selection submitted to `shipping-information`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressInformation {
    /// Destination address
    pub shipping_address: Address,

    /// Billing address
    pub billing_address: Address,

    /// Selected carrier code
    pub shipping_carrier_code: String,

    /// Selected method code
    pub shipping_method_code: String,
}

impl AddressInformation {
    /// Build shipping information from an address and a chosen carrier,
    /// billing to the same address
    pub fn new(address: Address, carrier: &Carrier) -> Self {
        Self {
            shipping_address: address.clone(),
            billing_address: address,
            shipping_carrier_code: carrier.carrier_code.clone(),
            shipping_method_code: carrier.method_code.clone(),
        }
    }

    /// Build shipping information with a distinct billing address
    pub fn with_billing(mut self, billing: Address) -> Self {
        self.billing_address = billing;
        self
    }
}

/// Full snapshot of remote cart state, as returned by a cart GET.
///
/// Snapshots are replaceable values: a refresh swaps the whole struct,
/// nothing is ever merged field-by-field on the client side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedCart {
    /// Numeric quote ID
    #[serde(default)]
    pub id: i64,

    /// Creation timestamp, verbatim Magento format ("YYYY-MM-DD HH:MM:SS")
    #[serde(default)]
    pub created_at: String,

    /// Last-update timestamp, verbatim Magento format
    #[serde(default)]
    pub updated_at: String,

    /// Whether the quote is still active
    #[serde(default)]
    pub is_active: bool,

    /// Whether the quote contains only virtual products
    #[serde(default)]
    pub is_virtual: bool,

    /// Line items
    #[serde(default)]
    pub items: Vec<Item>,

    /// Number of distinct line items
    #[serde(default)]
    pub items_count: i64,

    /// Total quantity across all line items
    #[serde(default)]
    pub items_qty: f64,

    /// Whether the quote belongs to a guest session
    #[serde(default)]
    pub customer_is_guest: bool,

    /// Owning store view ID
    #[serde(default)]
    pub store_id: i64,
}

impl DetailedCart {
    /// Check if the cart has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// IDs of all line items currently in the snapshot, in snapshot order
    pub fn item_ids(&self) -> Vec<i64> {
        self.items.iter().filter_map(|item| item.item_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_serializes_quote_id() {
        let mut item = Item::new("WS12-M-Red", 2);
        item.quote_id = "41".to_string();

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value, json!({"sku": "WS12-M-Red", "qty": 2, "quote_id": "41"}));
    }

    #[test]
    fn test_new_item_omits_unset_fields() {
        let value = serde_json::to_value(Item::new("24-MB01", 1)).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("item_id"));
        assert!(!obj.contains_key("quote_id"));
        assert!(!obj.contains_key("price"));
    }

    #[test]
    fn test_detailed_cart_deserializes_magento_payload() {
        let payload = json!({
            "id": 41,
            "created_at": "2024-03-01 09:15:00",
            "updated_at": "2024-03-01 09:20:12",
            "is_active": true,
            "is_virtual": false,
            "items": [
                {"item_id": 7, "sku": "24-MB01", "qty": 1, "name": "Joust Bag",
                 "price": 34.0, "product_type": "simple", "quote_id": "41"}
            ],
            "items_count": 1,
            "items_qty": 1.0,
            "customer_is_guest": true,
            "store_id": 1
        });

        let cart: DetailedCart = serde_json::from_value(payload).unwrap();
        assert_eq!(cart.id, 41);
        assert_eq!(cart.item_ids(), vec![7]);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_address_information_from_carrier() {
        let address = Address {
            street: vec!["Musterstr. 1".into()],
            city: "Munich".into(),
            postcode: "80331".into(),
            country_id: "DE".into(),
            ..Address::default()
        };
        let carrier = Carrier {
            carrier_code: "flatrate".into(),
            method_code: "flatrate".into(),
            carrier_title: "Flat Rate".into(),
            method_title: "Fixed".into(),
            amount: 5.0,
            base_amount: 5.0,
            available: true,
            price_excl_tax: 5.0,
            price_incl_tax: 5.0,
            error_message: None,
        };

        let info = AddressInformation::new(address.clone(), &carrier);
        assert_eq!(info.shipping_carrier_code, "flatrate");
        assert_eq!(info.billing_address, address);
    }
}
