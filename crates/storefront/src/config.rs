//! Widget configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WISHLIST_STORAGE_KEY` - Store key and cookie name; ASCII letters, digits,
//!   `_`, `-` and `.` (default: `shopify_wishlist`)
//! - `WISHLIST_CART_URL` - Storefront root serving `cart/add.js` and `cart.js`;
//!   an origin or an origin plus locale prefix (default: `http://127.0.0.1:3000`)
//! - `WISHLIST_DATA_DIR` - Directory for the file-backed store and cookie jar
//!   (default: `.wishlist`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

use crate::storage::is_valid_key;

/// Default store key and cookie name.
pub const DEFAULT_STORAGE_KEY: &str = "shopify_wishlist";

const DEFAULT_CART_URL: &str = "http://127.0.0.1:3000";
const DEFAULT_DATA_DIR: &str = ".wishlist";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Wishlist widget configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Key for the primary store entry and the cookie mirror
    pub storage_key: String,
    /// Root of the storefront cart endpoints
    pub cart_url: Url,
    /// Root of the file-backed storage
    pub data_dir: PathBuf,
}

impl WidgetConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let storage_key = get_or_default(&lookup, "WISHLIST_STORAGE_KEY", DEFAULT_STORAGE_KEY);
        if !is_valid_key(&storage_key) {
            return Err(ConfigError::InvalidEnvVar(
                "WISHLIST_STORAGE_KEY".to_string(),
                format!("{storage_key:?} must be ASCII letters, digits, '_', '-' or '.'"),
            ));
        }

        let cart_url = get_or_default(&lookup, "WISHLIST_CART_URL", DEFAULT_CART_URL);
        let cart_url = Url::parse(&cart_url).map_err(|e| {
            ConfigError::InvalidEnvVar("WISHLIST_CART_URL".to_string(), e.to_string())
        })?;
        if cart_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidEnvVar(
                "WISHLIST_CART_URL".to_string(),
                "must be an absolute http(s) URL".to_string(),
            ));
        }

        Ok(Self {
            storage_key,
            cart_url,
            data_dir: PathBuf::from(get_or_default(&lookup, "WISHLIST_DATA_DIR", DEFAULT_DATA_DIR)),
        })
    }

    /// Directory used by the primary file store.
    #[must_use]
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("local")
    }

    /// File used by the cookie jar.
    #[must_use]
    pub fn cookie_path(&self) -> PathBuf {
        self.data_dir.join("cookies.txt")
    }
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = WidgetConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.storage_key, "shopify_wishlist");
        assert_eq!(config.cart_url.as_str(), "http://127.0.0.1:3000/");
        assert_eq!(config.cookie_path(), PathBuf::from(".wishlist/cookies.txt"));
    }

    #[test]
    fn test_overrides() {
        let config = WidgetConfig::from_lookup(lookup(&[
            ("WISHLIST_STORAGE_KEY", "my_list"),
            ("WISHLIST_CART_URL", "https://shop.example.com"),
            ("WISHLIST_DATA_DIR", "/tmp/wl"),
        ]))
        .unwrap();
        assert_eq!(config.storage_key, "my_list");
        assert_eq!(config.cart_url.as_str(), "https://shop.example.com/");
        assert_eq!(config.store_dir(), PathBuf::from("/tmp/wl/local"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            WidgetConfig::from_lookup(lookup(&[("WISHLIST_CART_URL", "not a url")])),
            Err(ConfigError::InvalidEnvVar(..))
        ));
        assert!(matches!(
            WidgetConfig::from_lookup(lookup(&[("WISHLIST_CART_URL", "mailto:a@b.c")])),
            Err(ConfigError::InvalidEnvVar(..))
        ));
        assert!(matches!(
            WidgetConfig::from_lookup(lookup(&[("WISHLIST_STORAGE_KEY", " ")])),
            Err(ConfigError::InvalidEnvVar(..))
        ));
    }

    #[test]
    fn test_storage_key_must_be_usable_as_file_and_cookie_name() {
        for key in ["shop:wishlist", "wish list", "a;b", "k=v", "../escape", ".hidden", ""] {
            let result = WidgetConfig::from_lookup(lookup(&[("WISHLIST_STORAGE_KEY", key)]));
            assert!(
                matches!(
                    result,
                    Err(ConfigError::InvalidEnvVar(ref var, _)) if var == "WISHLIST_STORAGE_KEY"
                ),
                "{key:?} should be rejected"
            );
        }

        let config =
            WidgetConfig::from_lookup(lookup(&[("WISHLIST_STORAGE_KEY", "shop-wishlist.v2")]))
                .unwrap();
        assert_eq!(config.storage_key, "shop-wishlist.v2");
    }
}
