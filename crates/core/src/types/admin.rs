//! Types exchanged between the admin backend and the admin dashboard.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::id::{CustomerId, ProductId};

/// Aggregate wishlist statistics shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistStats {
    pub total_users: u64,
    pub total_wishlists: u64,
    pub total_wishlist_items: u64,
    pub active_users: u64,
}

/// One product in a customer's wishlist as listed in the admin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWishlistItem {
    pub id: ProductId,
    pub title: String,
    pub image: String,
    /// Already formatted for display.
    pub price: String,
    pub added_at: NaiveDate,
}

/// A customer's wishlist summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWishlist {
    pub id: CustomerId,
    pub customer_name: String,
    pub customer_email: String,
    pub item_count: u32,
    pub last_updated: NaiveDate,
    pub items: Vec<CustomerWishlistItem>,
}

/// Errors found when validating [`AppSettings`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A color field is not `#rgb` or `#rrggbb`.
    #[error("{field} must be a hex color like #e91e63 (got {value:?})")]
    InvalidColor { field: &'static str, value: String },
    /// Dropdown item count outside the accepted range.
    #[error("dropdownItems must be between {min} and {max} (got {value})")]
    DropdownItemsOutOfRange { min: u32, max: u32, value: u32 },
    /// Maximum wishlist size of zero.
    #[error("maxWishlistItems must be at least 1")]
    ZeroMaxItems,
    /// Wishlist page URL is not a site-relative path.
    #[error("wishlistPageUrl must start with '/' (got {0:?})")]
    InvalidPageUrl(String),
}

/// App-wide configuration editable from the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub heart_color: String,
    pub heart_color_active: String,
    pub dropdown_items: u32,
    pub wishlist_page_url: String,
    pub enable_guest_wishlist: bool,
    pub enable_wishlist_sharing: bool,
    pub max_wishlist_items: u32,
}

impl AppSettings {
    pub const MIN_DROPDOWN_ITEMS: u32 = 1;
    pub const MAX_DROPDOWN_ITEMS: u32 = 20;

    /// Check every field, reporting the first problem found.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        check_color("heartColor", &self.heart_color)?;
        check_color("heartColorActive", &self.heart_color_active)?;

        if !(Self::MIN_DROPDOWN_ITEMS..=Self::MAX_DROPDOWN_ITEMS).contains(&self.dropdown_items) {
            return Err(SettingsError::DropdownItemsOutOfRange {
                min: Self::MIN_DROPDOWN_ITEMS,
                max: Self::MAX_DROPDOWN_ITEMS,
                value: self.dropdown_items,
            });
        }

        if self.max_wishlist_items == 0 {
            return Err(SettingsError::ZeroMaxItems);
        }

        if !self.wishlist_page_url.starts_with('/') {
            return Err(SettingsError::InvalidPageUrl(self.wishlist_page_url.clone()));
        }

        Ok(())
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            heart_color: "#e91e63".to_string(),
            heart_color_active: "#c2185b".to_string(),
            dropdown_items: 5,
            wishlist_page_url: "/pages/wishlist".to_string(),
            enable_guest_wishlist: true,
            enable_wishlist_sharing: false,
            max_wishlist_items: 100,
        }
    }
}

fn check_color(field: &'static str, value: &str) -> Result<(), SettingsError> {
    let valid = value.strip_prefix('#').is_some_and(|hex| {
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
    });

    if valid {
        Ok(())
    } else {
        Err(SettingsError::InvalidColor {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert_eq!(AppSettings::default().validate(), Ok(()));
    }

    #[test]
    fn test_settings_wire_names() {
        let value = serde_json::to_value(AppSettings::default()).unwrap();
        assert_eq!(value["heartColor"], json!("#e91e63"));
        assert_eq!(value["dropdownItems"], json!(5));
        assert_eq!(value["maxWishlistItems"], json!(100));
    }

    #[test]
    fn test_short_hex_color_is_accepted() {
        let settings = AppSettings {
            heart_color: "#f0a".to_string(),
            ..AppSettings::default()
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let settings = AppSettings {
            heart_color_active: "red".to_string(),
            ..AppSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::InvalidColor {
                field: "heartColorActive",
                ..
            })
        ));
    }

    #[test]
    fn test_dropdown_items_range() {
        let settings = AppSettings {
            dropdown_items: 0,
            ..AppSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::DropdownItemsOutOfRange { value: 0, .. })
        ));

        let settings = AppSettings {
            dropdown_items: 21,
            ..AppSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_page_url_must_be_relative() {
        let settings = AppSettings {
            wishlist_page_url: "pages/wishlist".to_string(),
            ..AppSettings::default()
        };
        assert_eq!(
            settings.validate(),
            Err(SettingsError::InvalidPageUrl("pages/wishlist".to_string()))
        );
    }

    #[test]
    fn test_customer_wishlist_dates_are_plain_dates() {
        let value = json!({
            "id": "1",
            "customerName": "John Doe",
            "customerEmail": "john@example.com",
            "itemCount": 5,
            "lastUpdated": "2024-01-15",
            "items": [{
                "id": "prod-1",
                "title": "Wireless Headphones",
                "image": "https://via.placeholder.com/60",
                "price": "$99.99",
                "addedAt": "2024-01-10"
            }]
        });
        let wishlist: CustomerWishlist = serde_json::from_value(value).unwrap();
        assert_eq!(wishlist.items[0].added_at.to_string(), "2024-01-10");
    }
}
