//! Storefront cart service client.
//!
//! Adds wishlist items to the shopper's cart through the storefront's Ajax
//! endpoints (`POST /cart/add.js`, `GET /cart.js`). The service answers a
//! rejected add with a JSON body and no `items`, so success is decided by the
//! body rather than the status code.

use std::future::Future;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use thiserror::Error;
use tracing::{error, instrument};
use url::Url;

use wishlist_core::{CartAddRequest, CartAddResponse, CartState, ProductId};

use crate::notify::{Notifier, Toast, messages};

/// Errors that can occur when talking to the cart service.
#[derive(Debug, Error)]
pub enum CartError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service returned a non-JSON error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Service answered but added nothing.
    #[error("Add to cart rejected: {0}")]
    Rejected(String),

    /// Endpoint URL could not be built.
    #[error("Invalid cart URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Failed to parse response.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// The cart operations the widget needs.
pub trait CartService {
    /// Add one unit of a product.
    ///
    /// Resolves to an error unless the service reports at least one added line.
    fn add_item(
        &self,
        id: &ProductId,
    ) -> impl Future<Output = Result<CartAddResponse, CartError>> + Send;

    /// Current cart summary.
    fn cart_state(&self) -> impl Future<Output = Result<CartState, CartError>> + Send;
}

/// Cart client over the storefront's Ajax API.
#[derive(Debug, Clone)]
pub struct HttpCartClient {
    client: reqwest::Client,
    add_url: Url,
    cart_url: Url,
}

impl HttpCartClient {
    /// Create a client for the storefront rooted at `base`.
    ///
    /// The endpoints resolve under `base`'s path, so a locale root such as
    /// `https://shop.example.com/fr` yields `/fr/cart/add.js`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build or `base` cannot
    /// carry the endpoint paths.
    pub fn new(base: &Url) -> Result<Self, CartError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        let mut root = base.clone();
        if !root.path().ends_with('/') {
            root.set_path(&format!("{}/", root.path()));
        }

        Ok(Self {
            client,
            add_url: root.join("cart/add.js")?,
            cart_url: root.join("cart.js")?,
        })
    }
}

impl CartService for HttpCartClient {
    #[instrument(skip(self), fields(product_id = %id))]
    async fn add_item(&self, id: &ProductId) -> Result<CartAddResponse, CartError> {
        let response = self
            .client
            .post(self.add_url.clone())
            .json(&CartAddRequest::single(id.clone()))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<CartAddResponse>(&body) {
            Ok(added) if added.is_success() => Ok(added),
            Ok(rejected) => Err(CartError::Rejected(
                rejected
                    .description
                    .unwrap_or_else(|| format!("no items added (status {})", status.as_u16())),
            )),
            Err(e) if status.is_success() => Err(CartError::Decode(e.to_string())),
            Err(_) => Err(CartError::Api {
                status: status.as_u16(),
                message: body,
            }),
        }
    }

    #[instrument(skip(self))]
    async fn cart_state(&self) -> Result<CartState, CartError> {
        let response = self.client.get(self.cart_url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CartError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| CartError::Decode(e.to_string()))
    }
}

/// Result of an add-to-cart action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOutcome {
    /// Added. `item_count` is the refreshed cart count, if it could be read.
    Added { item_count: Option<u32> },
    Failed,
}

/// Add a product to the cart and tell the shopper how it went.
///
/// On success the cart count is re-read; a failure there is only logged.
pub async fn add_to_cart<C: CartService>(
    cart: &C,
    notifier: &dyn Notifier,
    id: &ProductId,
) -> CartOutcome {
    match cart.add_item(id).await {
        Ok(_) => {
            notifier.notify(Toast::success(messages::ADDED_TO_CART));
            let item_count = match cart.cart_state().await {
                Ok(state) => Some(state.item_count),
                Err(e) => {
                    error!(error = %e, "Failed to refresh cart count");
                    None
                }
            };
            CartOutcome::Added { item_count }
        }
        Err(e) => {
            error!(product_id = %id, error = %e, "Add to cart error");
            notifier.notify(Toast::error(messages::CART_FAILED));
            CartOutcome::Failed
        }
    }
}
