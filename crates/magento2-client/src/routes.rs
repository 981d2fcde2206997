//! # Endpoint Routes
//!
//! Relative resource paths of the Magento2 REST API, joined onto the
//! client's base route (`{scheme}://{host}/rest/{store_code}/V1`).

/// Admin token exchange
pub(crate) const ADMIN_TOKEN: &str = "/integration/admin/token";

/// Customer token exchange
pub(crate) const CUSTOMER_TOKEN: &str = "/integration/customer/token";

/// Guest cart collection
pub(crate) const GUEST_CARTS: &str = "/guest-carts";

/// The authenticated customer's own cart
pub(crate) const CUSTOMER_CART: &str = "/carts/mine";

/// Line items, relative to a cart route
pub(crate) const CART_ITEMS: &str = "/items";

/// Shipping estimation, relative to a cart route
pub(crate) const CART_SHIPPING_COSTS: &str = "/estimate-shipping-methods";

/// Shipping selection, relative to a cart route
pub(crate) const CART_SHIPPING_INFORMATION: &str = "/shipping-information";

/// Payment estimation, relative to a cart route
pub(crate) const CART_PAYMENT_METHODS: &str = "/payment-methods";

/// Order placement, relative to a cart route
pub(crate) const CART_PLACE_ORDER: &str = "/payment-information";

/// Order collection
pub(crate) const ORDERS: &str = "/orders";

/// Product attribute-set collection
pub(crate) const ATTRIBUTE_SETS: &str = "/products/attribute-sets";
