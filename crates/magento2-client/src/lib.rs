//! # magento2-client
//!
//! Typed HTTP resources for the Magento2 REST API.
//!
//! This crate maps the cart/order workflow onto sequential, typed remote
//! calls:
//!
//! 1. Build an `ApiClient` for a store scope
//! 2. Obtain a `Cart` (guest or customer)
//! 3. Add items, estimate shipping, submit shipping information,
//!    estimate payment methods
//! 4. Place the order and receive an `Order`
//!
//! Each operation is a single HTTP request with uniform status checking:
//! any status >= 400 surfaces as `MagentoError::UnexpectedStatus` with
//! the code and raw body. Nothing is retried or cached; the `Cart`'s
//! `detailed` snapshot is an explicit, wholesale-replaced cache of
//! remote state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use magento2_client::{ApiClient, StoreConfig};
//! use magento2_core::{Address, AddressInformation, Item};
//!
//! let store = StoreConfig::new("https", "shop.example.com", "default");
//! let client = ApiClient::from_integration(&store, "yd1o9zs1hb1qxnn8ek68eu8nwqjg5hrv")?;
//!
//! let mut cart = client.new_guest_cart().await?;
//! cart.add_items(vec![Item::new("24-MB01", 1)]).await?;
//!
//! let address = Address { country_id: "DE".into(), postcode: "80331".into(), ..Default::default() };
//! let carriers = cart.estimate_shipping_carrier(address.clone()).await?;
//! cart.add_shipping_information(AddressInformation::new(address, &carriers[0])).await?;
//!
//! let methods = cart.estimate_payment_methods().await?;
//! let order = cart.create_order(&methods[0]).await?;
//! println!("Placed order {}", order.id);
//! ```

pub mod api;
pub mod attribute_set;
pub mod cart;
pub mod config;
pub mod order;

mod routes;
mod util;

// Re-exports
pub use api::ApiClient;
pub use attribute_set::{create_attribute_set, get_attribute_set};
pub use cart::Cart;
pub use config::StoreConfig;
pub use order::Order;
