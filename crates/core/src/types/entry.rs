//! Wishlist entries and the product descriptors they are built from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::Price;

/// Product data read off a storefront control (the wishlist button's
/// `data-product-*` attributes) or handed in by another script on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
    #[serde(default, deserialize_with = "Price::deserialize_lenient")]
    pub price: Option<Price>,
}

impl ProductDescriptor {
    /// Create a descriptor with only an id and title.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image: String::new(),
            url: String::new(),
            price: None,
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: Price) -> Self {
        self.price = Some(price);
        self
    }

    /// Stamp the descriptor with its insertion time.
    #[must_use]
    pub fn into_entry(self, added_at: DateTime<Utc>) -> WishlistEntry {
        WishlistEntry {
            id: self.id,
            title: self.title,
            image: self.image,
            url: self.url,
            price: self.price,
            added_at,
        }
    }
}

/// One remembered product.
///
/// This is the persisted shape: a JSON array of these lives under the
/// storage key. `added_at` is set once at insertion and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    pub id: ProductId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "Price::deserialize_lenient"
    )]
    pub price: Option<Price>,
    pub added_at: DateTime<Utc>,
}

impl WishlistEntry {
    /// Display price, or an empty string when the product had none.
    #[must_use]
    pub fn formatted_price(&self) -> String {
        self.price.as_ref().map(Price::display).unwrap_or_default()
    }
}
