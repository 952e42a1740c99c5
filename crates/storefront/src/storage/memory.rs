//! In-memory storage adapters.
//!
//! Clones share the same backing map, so a test (or a second "tab") can hold
//! a handle to the store a manager writes into.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::{CookieJar, KeyValueStore, SetCookie, StorageError, lock, mirror};

/// In-memory key-value store with an optional byte quota.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects writes whose value is larger than `quota` bytes.
    #[must_use]
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(quota),
        }
    }

    /// Write directly, bypassing the quota. Simulates another tab's write.
    pub fn insert(&self, key: &str, value: &str) {
        lock(&self.entries).insert(key.to_string(), value.to_string());
    }

    /// Read directly.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(quota) = self.quota.filter(|&quota| value.len() > quota) {
            return Err(StorageError::QuotaExceeded {
                quota,
                attempted: value.len(),
            });
        }
        self.insert(key, value);
        Ok(())
    }
}

/// In-memory cookie jar.
///
/// Reads go through the `document.cookie`-style header, as a page script's
/// would.
#[derive(Debug, Clone, Default)]
pub struct MemoryCookieJar {
    cookies: Arc<Mutex<HashMap<String, SetCookie>>>,
}

impl MemoryCookieJar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Live cookies as a `document.cookie`-style header, sorted by name.
    #[must_use]
    pub fn header(&self) -> String {
        let now = Utc::now();
        let cookies = lock(&self.cookies);
        let mut pairs: Vec<_> = cookies
            .values()
            .filter(|cookie| mirror::is_live_at(cookie, now))
            .map(|cookie| format!("{}={}", cookie.name(), cookie.value()))
            .collect();
        pairs.sort();
        pairs.join("; ")
    }

    /// The stored cookie assignment, including expired ones.
    #[cfg(test)]
    pub(crate) fn cookie(&self, name: &str) -> Option<SetCookie> {
        lock(&self.cookies).get(name).cloned()
    }
}

impl CookieJar for MemoryCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        mirror::find_in_header(&self.header(), name)
    }

    fn set(&mut self, cookie: &SetCookie) -> Result<(), StorageError> {
        lock(&self.cookies).insert(cookie.name().to_string(), cookie.clone());
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let mut handle = store.clone();
        handle.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_quota_rejects_large_values() {
        let mut store = MemoryStore::with_quota(4);
        store.set("k", "1234").unwrap();
        let err = store.set("k", "12345").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                quota: 4,
                attempted: 5
            }
        ));
        assert_eq!(store.raw("k").as_deref(), Some("1234"));
    }

    #[test]
    fn test_expired_cookie_is_hidden() {
        let mut jar = MemoryCookieJar::new();
        let long_ago = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        jar.set(&mirror::build("old", "x", long_ago).unwrap()).unwrap();
        jar.set(&mirror::build("new", "[]", Utc::now()).unwrap()).unwrap();

        assert_eq!(jar.get("old"), None);
        assert!(jar.cookie("old").is_some());
        assert_eq!(jar.get("new").as_deref(), Some("%5B%5D"));
        assert_eq!(jar.header(), "new=%5B%5D");
    }

    #[test]
    fn test_cookie_replaced_by_name() {
        let mut jar = MemoryCookieJar::new();
        let now = Utc::now();
        jar.set(&mirror::build("k", "a", now).unwrap()).unwrap();
        jar.set(&mirror::build("k", "b", now + Duration::seconds(1)).unwrap()).unwrap();
        assert_eq!(jar.get("k").as_deref(), Some("b"));
    }
}
