//! Wire types for the storefront cart service (`/cart/add.js`, `/cart.js`).

use serde::{Deserialize, Serialize};

use super::id::ProductId;

/// One line of an add-to-cart request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineInput {
    pub id: ProductId,
    pub quantity: u32,
}

/// Body of `POST /cart/add.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartAddRequest {
    pub items: Vec<CartLineInput>,
}

impl CartAddRequest {
    /// Request a single unit of one product.
    #[must_use]
    pub fn single(id: ProductId) -> Self {
        Self {
            items: vec![CartLineInput { id, quantity: 1 }],
        }
    }
}

/// A line the cart service reports as added.
///
/// Only the fields the widget looks at are modelled; the service sends many more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub title: Option<String>,
}

/// Response of `POST /cart/add.js`.
///
/// A rejected add comes back without `items` (Shopify sends
/// `{"status": 422, "description": ...}`), so a missing collection decodes
/// as empty rather than failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartAddResponse {
    #[serde(default)]
    pub items: Vec<CartLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CartAddResponse {
    /// At least one line was added.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.items.is_empty()
    }
}

/// Response of `GET /cart.js`, reduced to the item count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartState {
    pub item_count: u32,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_add_request_wire_shape() {
        let body = serde_json::to_value(CartAddRequest::single(ProductId::new("42"))).unwrap();
        assert_eq!(body, json!({"items": [{"id": "42", "quantity": 1}]}));
    }

    #[test]
    fn test_rejection_payload_is_not_success() {
        let rejected: CartAddResponse =
            serde_json::from_value(json!({"status": 422, "description": "Sold out"})).unwrap();
        assert!(!rejected.is_success());
        assert_eq!(rejected.description.as_deref(), Some("Sold out"));
    }

    #[test]
    fn test_added_payload_is_success() {
        let added: CartAddResponse =
            serde_json::from_value(json!({"items": [{"id": 42, "quantity": 1}]})).unwrap();
        assert!(added.is_success());
    }
}
