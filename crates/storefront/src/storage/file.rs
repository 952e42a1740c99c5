//! Directory-backed storage adapters.
//!
//! [`FileStore`] keeps one `<key>.json` file per key. [`FileCookieJar`] keeps
//! one cookie assignment per line in a single file. Writes go to a temporary
//! file first and are renamed into place.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;

use super::{CookieJar, KeyValueStore, SetCookie, StorageError, is_valid_key, mirror};

/// Key-value store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if !is_valid_key(key) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        write_atomic(&path, value)
    }
}

/// Cookie jar persisted as one assignment per line.
#[derive(Debug, Clone)]
pub struct FileCookieJar {
    path: PathBuf,
}

impl FileCookieJar {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<Vec<SetCookie>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.lines().filter_map(mirror::parse_line).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl CookieJar for FileCookieJar {
    fn get(&self, name: &str) -> Option<String> {
        let now = Utc::now();
        match self.read_all() {
            Ok(cookies) => cookies
                .into_iter()
                .find(|cookie| cookie.name() == name && mirror::is_live_at(cookie, now))
                .map(|cookie| cookie.value().to_string()),
            Err(error) => {
                tracing::warn!(path = %self.path.display(), %error, "Failed to read cookie jar");
                None
            }
        }
    }

    fn set(&mut self, cookie: &SetCookie) -> Result<(), StorageError> {
        let now = Utc::now();
        let mut cookies = self.read_all()?;
        cookies.retain(|existing| {
            existing.name() != cookie.name() && mirror::is_live_at(existing, now)
        });
        cookies.push(cookie.clone());

        let contents: String = cookies
            .iter()
            .map(|cookie| format!("{cookie}\n"))
            .collect();
        write_atomic(&self.path, &contents)
    }
}

fn write_atomic(path: &Path, contents: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("local"));

        assert_eq!(store.get("shopify_wishlist").unwrap(), None);
        store.set("shopify_wishlist", "[]").unwrap();
        assert_eq!(store.get("shopify_wishlist").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(
            store.get("../escape"),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_file_cookie_jar_replaces_and_expires() {
        let dir = tempfile::tempdir().unwrap();
        let mut jar = FileCookieJar::new(dir.path().join("cookies.txt"));

        let long_ago = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        jar.set(&mirror::build("stale", "x", long_ago).unwrap()).unwrap();
        jar.set(&mirror::build("shopify_wishlist", "[1]", Utc::now()).unwrap()).unwrap();
        jar.set(&mirror::build("shopify_wishlist", "[2]", Utc::now()).unwrap()).unwrap();

        assert_eq!(jar.get("stale"), None);
        assert_eq!(jar.get("shopify_wishlist").as_deref(), Some("%5B2%5D"));

        let contents = fs::read_to_string(dir.path().join("cookies.txt")).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
