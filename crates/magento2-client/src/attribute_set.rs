//! # Attribute Set Administration
//!
//! Creation and retrieval of product attribute sets. Requires an
//! admin-scoped client (integration token or admin authentication).

use crate::api::ApiClient;
use crate::routes;
use crate::util::parse_json;
use magento2_core::{AttributeSet, MagentoResult};
use serde::Serialize;
use tracing::{info, instrument};

#[derive(Serialize)]
struct CreateAttributeSetPayload<'a> {
    #[serde(rename = "attributeSet")]
    attribute_set: &'a AttributeSet,
    #[serde(rename = "skeletonId")]
    skeleton_id: i64,
}

/// Create an attribute set on the remote, cloned from a skeleton set.
///
/// `skeleton_id` names the set to copy groups and attributes from;
/// Magento's default product attribute set always has ID 4.
#[instrument(skip(client, set), fields(name = %set.attribute_set_name))]
pub async fn create_attribute_set(
    client: &ApiClient,
    set: AttributeSet,
    skeleton_id: i64,
) -> MagentoResult<AttributeSet> {
    let payload = CreateAttributeSetPayload {
        attribute_set: &set,
        skeleton_id,
    };

    let body = client
        .post_json(&client.route(routes::ATTRIBUTE_SETS), &payload)
        .await?;

    let created: AttributeSet = parse_json(&body, "attribute set")?;
    info!(
        "Created attribute set: id={:?} name={}",
        created.attribute_set_id, created.attribute_set_name
    );

    Ok(created)
}

/// Fetch an attribute set by its remote ID
pub async fn get_attribute_set(client: &ApiClient, set_id: i64) -> MagentoResult<AttributeSet> {
    let route = format!("{}/{}", client.route(routes::ATTRIBUTE_SETS), set_id);
    let body = client.get_text(&route).await?;
    parse_json(&body, "attribute set")
}
