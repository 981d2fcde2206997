//! # Attribute Set Types
//!
//! Wire types for the product attribute-set administration endpoints.

use serde::{Deserialize, Serialize};

/// A named grouping of product attributes.
///
/// When creating a set only `attribute_set_name` and `sort_order` are
/// supplied; Magento assigns `attribute_set_id` and `entity_type_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeSet {
    /// Remote-assigned set ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_set_id: Option<i64>,

    /// Set name
    pub attribute_set_name: String,

    /// Sort order among sets
    pub sort_order: i64,

    /// Entity type the set applies to (4 = product)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_type_id: Option<i64>,
}

impl AttributeSet {
    /// Define an attribute set to be created
    pub fn new(name: impl Into<String>, sort_order: i64) -> Self {
        Self {
            attribute_set_id: None,
            attribute_set_name: name.into(),
            sort_order,
            entity_type_id: None,
        }
    }
}
