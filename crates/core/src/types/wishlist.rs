//! The ordered wishlist collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::{ProductDescriptor, WishlistEntry};
use super::id::ProductId;

/// A shopper's wishlist, most recently added first.
///
/// ## Invariants
///
/// - Product ids are unique: inserting an id that is already present is a no-op
/// - New entries go to the front
/// - Removing deletes at most one entry
///
/// There is no length cap; `maxWishlistItems` in the admin settings is not
/// enforced here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<WishlistEntry>", into = "Vec<WishlistEntry>")]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a wishlist from stored entries, keeping the first occurrence of
    /// each id.
    #[must_use]
    pub fn from_entries(entries: Vec<WishlistEntry>) -> Self {
        let mut wishlist = Self::new();
        for entry in entries {
            if !wishlist.contains(&entry.id) {
                wishlist.entries.push(entry);
            }
        }
        wishlist
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether an entry with this id is present.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.entries.iter().any(|entry| &entry.id == id)
    }

    /// Look up an entry by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&WishlistEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Insert a product at the front, stamped with `added_at`.
    ///
    /// Returns `false` (and leaves the wishlist untouched) if the id is
    /// already present.
    pub fn insert(&mut self, product: ProductDescriptor, added_at: DateTime<Utc>) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.entries.insert(0, product.into_entry(added_at));
        true
    }

    /// Remove the entry with this id, returning it if it was present.
    pub fn remove(&mut self, id: &ProductId) -> Option<WishlistEntry> {
        let index = self.entries.iter().position(|entry| &entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &WishlistEntry> {
        self.entries.iter()
    }

    /// The first `limit` entries.
    #[must_use]
    pub fn preview(&self, limit: usize) -> &[WishlistEntry] {
        let end = limit.min(self.entries.len());
        self.entries.get(..end).unwrap_or_default()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[WishlistEntry] {
        &self.entries
    }

    #[must_use]
    pub fn into_entries(self) -> Vec<WishlistEntry> {
        self.entries
    }
}

impl From<Vec<WishlistEntry>> for Wishlist {
    fn from(entries: Vec<WishlistEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Wishlist> for Vec<WishlistEntry> {
    fn from(wishlist: Wishlist) -> Self {
        wishlist.entries
    }
}

impl<'a> IntoIterator for &'a Wishlist {
    type Item = &'a WishlistEntry;
    type IntoIter = std::slice::Iter<'a, WishlistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
