//! # API Client
//!
//! The authenticated transport shared by every resource object.
//!
//! An `ApiClient` holds the store scope (as a precomputed base route) and
//! the bearer token attached to every request. Cloning is cheap: the
//! underlying `reqwest::Client` is pooled and shared, so independent
//! resources (carts, orders) all reuse one connection pool.

use crate::cart::Cart;
use crate::config::StoreConfig;
use crate::routes;
use crate::util::trim_surrounding_quotes;
use magento2_core::{MagentoError, MagentoResult};
use reqwest::{Client, RequestBuilder};
use serde::Serialize;
use tracing::{debug, error, info, instrument};

/// Client for one Magento2 store scope
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_route: String,
    token: Option<String>,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl ApiClient {
    fn new(store: &StoreConfig, token: Option<String>) -> Self {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_route: store.base_route(),
            token,
        }
    }

    /// Create a client from a ready integration bearer token
    pub fn from_integration(
        store: &StoreConfig,
        bearer_token: impl Into<String>,
    ) -> MagentoResult<Self> {
        store.validate()?;
        Ok(Self::new(store, Some(bearer_token.into())))
    }

    /// Create an anonymous client for guest-cart flows
    pub fn guest(store: &StoreConfig) -> MagentoResult<Self> {
        store.validate()?;
        Ok(Self::new(store, None))
    }

    /// Create a client by exchanging admin credentials for a bearer token
    #[instrument(skip(password))]
    pub async fn from_authentication(
        store: &StoreConfig,
        username: &str,
        password: &str,
    ) -> MagentoResult<Self> {
        Self::authenticate(store, routes::ADMIN_TOKEN, username, password).await
    }

    /// Create a client by exchanging customer credentials for a bearer token
    #[instrument(skip(password))]
    pub async fn from_customer_authentication(
        store: &StoreConfig,
        username: &str,
        password: &str,
    ) -> MagentoResult<Self> {
        Self::authenticate(store, routes::CUSTOMER_TOKEN, username, password).await
    }

    async fn authenticate(
        store: &StoreConfig,
        token_route: &str,
        username: &str,
        password: &str,
    ) -> MagentoResult<Self> {
        let anonymous = Self::guest(store)?;
        let body = anonymous
            .post_json(
                &anonymous.route(token_route),
                &TokenRequest { username, password },
            )
            .await?;

        // The token arrives as a bare JSON string
        let token = trim_surrounding_quotes(&body).to_string();
        info!("Obtained bearer token for '{}'", username);

        Ok(Self {
            token: Some(token),
            ..anonymous
        })
    }

    /// Compute a fully-qualified endpoint route from a relative resource path
    pub fn route(&self, path: &str) -> String {
        format!("{}{}", self.base_route, path)
    }

    /// Create a fresh guest cart on the remote and bind a `Cart` to it
    #[instrument(skip(self))]
    pub async fn new_guest_cart(&self) -> MagentoResult<Cart> {
        let body = self.post_empty(&self.route(routes::GUEST_CARTS)).await?;
        let quote_id = trim_surrounding_quotes(&body).to_string();

        info!("Created guest cart: quote_id={}", quote_id);

        let route = format!("{}/{}", self.route(routes::GUEST_CARTS), quote_id);
        Ok(Cart::new(route, quote_id, self.clone()))
    }

    /// Create (or resume) the authenticated customer's cart
    #[instrument(skip(self))]
    pub async fn new_customer_cart(&self) -> MagentoResult<Cart> {
        let body = self.post_empty(&self.route(routes::CUSTOMER_CART)).await?;
        let quote_id = trim_surrounding_quotes(&body).to_string();

        info!("Created customer cart: quote_id={}", quote_id);

        Ok(Cart::new(
            self.route(routes::CUSTOMER_CART),
            quote_id,
            self.clone(),
        ))
    }

    /// Bind a `Cart` to an existing guest quote, without a remote call.
    ///
    /// The snapshot starts stale; call `update_self` to populate it.
    pub fn guest_cart(&self, quote_id: impl Into<String>) -> Cart {
        let quote_id = quote_id.into();
        let route = format!("{}/{}", self.route(routes::GUEST_CARTS), quote_id);
        Cart::new(route, quote_id, self.clone())
    }

    /// Bind a `Cart` to the authenticated customer's existing cart
    pub fn customer_cart(&self, quote_id: impl Into<String>) -> Cart {
        Cart::new(
            self.route(routes::CUSTOMER_CART),
            quote_id.into(),
            self.clone(),
        )
    }

    pub(crate) async fn get_text(&self, route: &str) -> MagentoResult<String> {
        debug!("GET {}", route);
        self.send(self.http.get(route)).await
    }

    pub(crate) async fn post_json<B: Serialize>(
        &self,
        route: &str,
        body: &B,
    ) -> MagentoResult<String> {
        debug!("POST {}", route);
        self.send(self.http.post(route).json(body)).await
    }

    pub(crate) async fn post_empty(&self, route: &str) -> MagentoResult<String> {
        debug!("POST {}", route);
        self.send(self.http.post(route)).await
    }

    pub(crate) async fn put_json<B: Serialize>(
        &self,
        route: &str,
        body: &B,
    ) -> MagentoResult<String> {
        debug!("PUT {}", route);
        self.send(self.http.put(route).json(body)).await
    }

    pub(crate) async fn delete(&self, route: &str) -> MagentoResult<String> {
        debug!("DELETE {}", route);
        self.send(self.http.delete(route)).await
    }

    /// Attach the bearer token, send, and apply the uniform status check:
    /// any status >= 400 is an error, with no per-code branching.
    async fn send(&self, request: RequestBuilder) -> MagentoResult<String> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|e| MagentoError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| MagentoError::Transport(e.to_string()))?;

        if status >= 400 {
            error!("Magento API error: status={}, body={}", status, body);
            return Err(MagentoError::UnexpectedStatus { status, body });
        }

        Ok(body)
    }
}
