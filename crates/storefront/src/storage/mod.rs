//! Durable browser-side storage.
//!
//! The wishlist lives in two places: a primary key-value store (the
//! equivalent of `localStorage`) and a cookie mirror under the same name.
//! Both are origin-scoped and shared by every tab, with no locking: the last
//! writer wins.
//!
//! # Adapters
//!
//! - [`MemoryStore`] / [`MemoryCookieJar`] - in-process, cloneable handles
//!   sharing one backing map
//! - [`FileStore`] / [`FileCookieJar`] - directory-backed, used by the CLI
//! - [`UnavailableStore`] - storage disabled (private browsing, blocked by
//!   policy); forces the cookie fallback

mod file;
mod memory;
pub mod mirror;

use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

pub use file::{FileCookieJar, FileStore};
pub use memory::{MemoryCookieJar, MemoryStore};
pub use mirror::SetCookie;

/// Errors that can occur when reading or writing durable storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store is not available in this environment.
    #[error("storage is unavailable")]
    Unavailable,

    /// A write would exceed the store's quota.
    #[error("storage quota exceeded: {attempted} bytes requested, {quota} allowed")]
    QuotaExceeded { quota: usize, attempted: usize },

    /// The key cannot be used by this store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored content could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A cookie value was not valid percent-encoded UTF-8.
    #[error("cookie decode error: {0}")]
    CookieDecode(String),

    /// The cookie expiry cannot be represented.
    #[error("invalid cookie expiry: {0}")]
    CookieExpiry(String),
}

/// Primary key-value store.
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the store is disabled, or
    /// another variant if the read fails.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the store is disabled, or
    /// another variant if the write fails.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Cookie storage for the mirror copy.
pub trait CookieJar {
    /// Raw (still percent-encoded) value of a live cookie.
    fn get(&self, name: &str) -> Option<String>;

    /// Set or replace a cookie.
    ///
    /// # Errors
    ///
    /// Returns an error if the jar cannot be written.
    fn set(&mut self, cookie: &SetCookie) -> Result<(), StorageError>;
}

/// A store that is never available.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableStore;

impl KeyValueStore for UnavailableStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<T: CookieJar + ?Sized> CookieJar for Box<T> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }

    fn set(&mut self, cookie: &SetCookie) -> Result<(), StorageError> {
        (**self).set(cookie)
    }
}

/// Whether `key` can name both a store entry and a cookie.
///
/// Keys are ASCII letters, digits, `_`, `-` and `.`, and must not start with
/// a dot.
#[must_use]
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Lock a mutex, recovering the data if a previous holder panicked.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
