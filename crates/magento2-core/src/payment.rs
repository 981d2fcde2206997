//! # Payment Types
//!
//! Wire types for the cart payment endpoints.

use serde::{Deserialize, Serialize};

/// An available payment option returned by `payment-methods`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// Method code submitted when placing the order (e.g. "checkmo")
    pub code: String,

    /// Display title (e.g. "Check / Money order")
    #[serde(default)]
    pub title: String,
}

/// The method code envelope submitted to `payment-information`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodCode {
    /// Selected payment method code
    pub method: String,
}

impl From<&PaymentMethod> for PaymentMethodCode {
    fn from(method: &PaymentMethod) -> Self {
        Self {
            method: method.code.clone(),
        }
    }
}
