//! Integration tests for client construction, token exchange and the
//! attribute-set administration endpoints.

use magento2_client::{create_attribute_set, get_attribute_set, ApiClient, StoreConfig};
use magento2_core::AttributeSet;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer) -> StoreConfig {
    let host = server.uri().trim_start_matches("http://").to_string();
    StoreConfig::new("http", host, "default")
}

#[tokio::test]
async fn admin_authentication_exchanges_credentials_for_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/default/V1/integration/admin/token"))
        .and(body_json(json!({"username": "admin", "password": "pw123"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"tok-abc\""))
        .expect(1)
        .mount(&server)
        .await;

    // Subsequent requests must carry the exchanged token, quotes stripped
    Mock::given(method("POST"))
        .and(path("/rest/default/V1/guest-carts"))
        .and(header("authorization", "Bearer tok-abc"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"Q1\""))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::from_authentication(&store_for(&server), "admin", "pw123")
        .await
        .unwrap();
    client.new_guest_cart().await.unwrap();
}

#[tokio::test]
async fn customer_authentication_uses_customer_token_route() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/default/V1/integration/customer/token"))
        .and(body_json(json!({"username": "jane@example.com", "password": "pw123"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"cust-tok\""))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/default/V1/carts/mine"))
        .and(header("authorization", "Bearer cust-tok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("7"))
        .expect(1)
        .mount(&server)
        .await;

    let client =
        ApiClient::from_customer_authentication(&store_for(&server), "jane@example.com", "pw123")
            .await
            .unwrap();

    let cart = client.new_customer_cart().await.unwrap();
    assert_eq!(cart.quote_id(), "7");
    assert!(cart.route().ends_with("/rest/default/V1/carts/mine"));
}

#[tokio::test]
async fn failed_authentication_surfaces_remote_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/default/V1/integration/admin/token"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = ApiClient::from_authentication(&store_for(&server), "admin", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn guest_cart_binds_route_to_returned_quote_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/default/V1/guest-carts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"ab12cd\""))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::guest(&store_for(&server)).unwrap();
    let cart = client.new_guest_cart().await.unwrap();

    assert_eq!(cart.quote_id(), "ab12cd");
    assert!(cart
        .route()
        .ends_with("/rest/default/V1/guest-carts/ab12cd"));
    assert!(cart.detailed().is_empty(), "snapshot starts stale and empty");
}

#[tokio::test]
async fn attaching_to_an_existing_guest_cart_issues_no_request() {
    let server = MockServer::start().await;

    // No mocks mounted: attaching must not touch the remote
    let client = ApiClient::guest(&store_for(&server)).unwrap();
    let cart = client.guest_cart("ab12cd");

    assert_eq!(cart.quote_id(), "ab12cd");
    assert!(cart
        .route()
        .ends_with("/rest/default/V1/guest-carts/ab12cd"));

    // The bound cart is usable for remote reads afterwards
    Mock::given(method("GET"))
        .and(path("/rest/default/V1/guest-carts/ab12cd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 9, "items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let details = cart.get_details().await.unwrap();
    assert_eq!(details.id, 9);
}

#[tokio::test]
async fn create_attribute_set_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/default/V1/products/attribute-sets"))
        .and(body_partial_json(json!({
            "attributeSet": {"attribute_set_name": "Sportswear", "sort_order": 2},
            "skeletonId": 4
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attribute_set_id": 12,
            "attribute_set_name": "Sportswear",
            "sort_order": 2,
            "entity_type_id": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::from_integration(&store_for(&server), "token").unwrap();
    let created = create_attribute_set(&client, AttributeSet::new("Sportswear", 2), 4)
        .await
        .unwrap();

    assert_eq!(created.attribute_set_id, Some(12));
    assert_eq!(created.entity_type_id, Some(4));
}

#[tokio::test]
async fn get_attribute_set_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/default/V1/products/attribute-sets/12"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attribute_set_id": 12,
            "attribute_set_name": "Sportswear",
            "sort_order": 2,
            "entity_type_id": 4
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::from_integration(&store_for(&server), "token").unwrap();
    let set = get_attribute_set(&client, 12).await.unwrap();
    assert_eq!(set.attribute_set_name, "Sportswear");
}

#[tokio::test]
async fn order_details_returns_raw_document() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/default/V1/guest-carts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"Q1\""))
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/rest/default/V1/guest-carts/Q1/payment-information"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\"42\""))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/default/V1/orders/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entity_id": 42,
            "status": "pending",
            "grand_total": 39.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::from_integration(&store_for(&server), "token").unwrap();
    let cart = client.new_guest_cart().await.unwrap();
    let order = cart
        .create_order(&magento2_core::PaymentMethod {
            code: "checkmo".into(),
            title: String::new(),
        })
        .await
        .unwrap();

    let details = order.get_details().await.unwrap();
    assert_eq!(details["status"], "pending");
}
