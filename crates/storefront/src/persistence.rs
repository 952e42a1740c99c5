//! Loading and saving the wishlist.
//!
//! The primary store holds the JSON array of entries under a fixed key; a
//! cookie with the same name holds a percent-encoded copy. Reads prefer the
//! primary store and fall back to the cookie only when the store is
//! unavailable or has nothing under the key. Every write updates both.

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use wishlist_core::Wishlist;

use crate::storage::{CookieJar, KeyValueStore, StorageError, mirror};

/// The wishlist's durable storage: primary store plus cookie mirror.
pub struct WishlistStorage {
    key: String,
    store: Box<dyn KeyValueStore>,
    cookies: Box<dyn CookieJar>,
}

impl std::fmt::Debug for WishlistStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistStorage")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl WishlistStorage {
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        store: impl KeyValueStore + 'static,
        cookies: impl CookieJar + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            store: Box::new(store),
            cookies: Box::new(cookies),
        }
    }

    /// The key used for both the store entry and the cookie.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Load the stored wishlist.
    ///
    /// Never fails: unreadable, malformed or missing data all yield an empty
    /// wishlist, with a warning logged for anything other than absence.
    #[must_use]
    pub fn load(&self) -> Wishlist {
        self.read().unwrap_or_else(|error| {
            warn!(key = %self.key, %error, "Failed to load wishlist");
            Wishlist::new()
        })
    }

    /// Write the wishlist to the primary store and the cookie mirror.
    ///
    /// An unavailable primary store is skipped and the cookie is still
    /// written. Any other failure stops the save at that point.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered.
    pub fn save(&mut self, wishlist: &Wishlist, now: DateTime<Utc>) -> Result<(), StorageError> {
        let json = serde_json::to_string(wishlist)?;

        match self.store.set(&self.key, &json) {
            Ok(()) => {}
            Err(StorageError::Unavailable) => {
                debug!(key = %self.key, "Primary store unavailable, writing cookie only");
            }
            Err(e) => return Err(e),
        }

        self.cookies.set(&mirror::build(&self.key, &json, now)?)?;

        debug!(key = %self.key, count = wishlist.len(), "Wishlist saved");
        Ok(())
    }

    fn read(&self) -> Result<Wishlist, StorageError> {
        let primary = match self.store.get(&self.key) {
            Ok(value) => value.filter(|json| !json.is_empty()),
            Err(StorageError::Unavailable) => None,
            Err(e) => return Err(e),
        };

        if let Some(json) = primary {
            return Ok(serde_json::from_str(&json)?);
        }

        match self.cookies.get(&self.key).filter(|raw| !raw.is_empty()) {
            Some(raw) => {
                let json = mirror::decode_value(&raw)?;
                Ok(serde_json::from_str(&json)?)
            }
            None => Ok(Wishlist::new()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use wishlist_core::{Price, ProductDescriptor};

    use super::*;
    use crate::storage::{MemoryCookieJar, MemoryStore, UnavailableStore};

    const KEY: &str = "shopify_wishlist";

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 15, 9, 0, 0).unwrap()
    }

    fn sample() -> Wishlist {
        let mut wishlist = Wishlist::new();
        wishlist.insert(
            ProductDescriptor::new("123", "Widget").with_price(Price::Minor(1999)),
            now(),
        );
        wishlist.insert(ProductDescriptor::new("456", "Gadget & Co"), now());
        wishlist
    }

    #[test]
    fn test_save_then_load_in_fresh_instance() {
        let store = MemoryStore::new();
        let jar = MemoryCookieJar::new();
        let mut storage = WishlistStorage::new(KEY, store.clone(), jar.clone());
        storage.save(&sample(), now()).unwrap();

        let fresh = WishlistStorage::new(KEY, store, jar);
        assert_eq!(fresh.load(), sample());
    }

    #[test]
    fn test_save_mirrors_into_cookie() {
        let store = MemoryStore::new();
        let jar = MemoryCookieJar::new();
        let mut storage = WishlistStorage::new(KEY, store.clone(), jar.clone());
        storage.save(&sample(), now()).unwrap();

        let cookie = jar.cookie(KEY).unwrap();
        let decoded = mirror::decode_value(cookie.value()).unwrap();
        assert_eq!(Some(decoded), store.raw(KEY));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(
            cookie.expires_datetime().map(|expires| expires.unix_timestamp()),
            Some(Utc.with_ymd_and_hms(2027, 10, 15, 9, 0, 0).unwrap().timestamp())
        );
    }

    #[test]
    fn test_cookie_fallback_when_store_unavailable() {
        let jar = MemoryCookieJar::new();
        let mut writer = WishlistStorage::new(KEY, MemoryStore::new(), jar.clone());
        writer.save(&sample(), Utc::now()).unwrap();

        let reader = WishlistStorage::new(KEY, UnavailableStore, jar);
        assert_eq!(reader.load(), sample());
    }

    #[test]
    fn test_cookie_fallback_when_store_empty() {
        let jar = MemoryCookieJar::new();
        let mut writer = WishlistStorage::new(KEY, MemoryStore::new(), jar.clone());
        writer.save(&sample(), Utc::now()).unwrap();

        let empty_store = MemoryStore::new();
        empty_store.insert(KEY, "");
        let reader = WishlistStorage::new(KEY, empty_store, jar);
        assert_eq!(reader.load(), sample());
    }

    #[test]
    fn test_primary_store_wins_over_cookie() {
        let jar = MemoryCookieJar::new();
        let mut writer = WishlistStorage::new(KEY, MemoryStore::new(), jar.clone());
        writer.save(&sample(), Utc::now()).unwrap();

        let store = MemoryStore::new();
        store.insert(KEY, "[]");
        let reader = WishlistStorage::new(KEY, store, jar);
        assert!(reader.load().is_empty());
    }

    #[test]
    fn test_malformed_content_loads_empty() {
        for garbage in ["{not json", "{\"id\":\"1\"}", "null", "[{\"title\":\"no id\"}]"] {
            let store = MemoryStore::new();
            store.insert(KEY, garbage);
            let storage = WishlistStorage::new(KEY, store, MemoryCookieJar::new());
            assert!(storage.load().is_empty(), "{garbage} should load empty");
        }
    }

    fn cookie_only(raw_value: &str) -> WishlistStorage {
        let mut jar = MemoryCookieJar::new();
        let cookie = cookie::Cookie::build((KEY, raw_value.to_string()))
            .path("/")
            .build()
            .into_owned();
        jar.set(&cookie).unwrap();
        WishlistStorage::new(KEY, UnavailableStore, jar)
    }

    #[test]
    fn test_undecodable_cookie_loads_empty() {
        let storage = cookie_only("%FF%FE");
        assert!(matches!(storage.read(), Err(StorageError::CookieDecode(_))));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_malformed_cookie_json_loads_empty() {
        let storage = cookie_only(&urlencoding::encode("[{\"id\":").into_owned());
        assert!(matches!(storage.read(), Err(StorageError::Serialization(_))));
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_malformed_cookie_behind_empty_store_loads_empty() {
        let jar = MemoryCookieJar::new();
        let mut writer = jar.clone();
        writer
            .set(&cookie::Cookie::build((KEY, "not%20json")).build().into_owned())
            .unwrap();

        let store = MemoryStore::new();
        store.insert(KEY, "");
        assert!(WishlistStorage::new(KEY, store, jar).load().is_empty());
    }

    #[test]
    fn test_nothing_stored_loads_empty() {
        let storage = WishlistStorage::new(KEY, UnavailableStore, MemoryCookieJar::new());
        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_unavailable_store_still_writes_cookie() {
        let jar = MemoryCookieJar::new();
        let mut storage = WishlistStorage::new(KEY, UnavailableStore, jar.clone());
        storage.save(&sample(), Utc::now()).unwrap();
        assert!(jar.cookie(KEY).is_some());
    }

    #[test]
    fn test_quota_failure_skips_cookie() {
        let jar = MemoryCookieJar::new();
        let mut storage = WishlistStorage::new(KEY, MemoryStore::with_quota(2), jar.clone());
        let err = storage.save(&sample(), Utc::now()).unwrap_err();
        assert!(matches!(err, StorageError::QuotaExceeded { .. }));
        assert!(jar.cookie(KEY).is_none());
    }

    #[test]
    fn test_reads_legacy_script_payload() {
        let legacy = concat!(
            r#"[{"id":"123","title":"Widget","image":"","url":"/products/widget","#,
            r#""price":"150","addedAt":"2024-01-10T08:30:00.000Z"}]"#,
        );
        let store = MemoryStore::new();
        store.insert(KEY, legacy);
        let wishlist = WishlistStorage::new(KEY, store, MemoryCookieJar::new()).load();
        assert_eq!(wishlist.len(), 1);
        assert_eq!(wishlist.as_slice()[0].formatted_price(), "$1.50");
    }
}
