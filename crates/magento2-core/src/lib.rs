//! # magento2-core
//!
//! Core types and errors for the magento2-rs REST client.
//!
//! This crate provides:
//! - `Item`, `Address`, `Carrier`, `AddressInformation`, and `DetailedCart`
//!   for the cart/checkout flow
//! - `PaymentMethod` and `PaymentMethodCode` for payment selection
//! - `AttributeSet` for the product administration endpoints
//! - `MagentoError` for typed error handling
//!
//! All wire types (de)serialize against Magento's snake_case JSON contract;
//! the HTTP resources that use them live in `magento2-client`.

pub mod attribute;
pub mod cart;
pub mod error;
pub mod payment;

// Re-exports for convenience
pub use attribute::AttributeSet;
pub use cart::{Address, AddressInformation, Carrier, DetailedCart, Item};
pub use error::{MagentoError, MagentoResult};
pub use payment::{PaymentMethod, PaymentMethodCode};
