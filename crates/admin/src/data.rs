//! Where the dashboard's numbers come from.
//!
//! There is no wishlist database yet: [`MockDataSource`] serves a fixed
//! fixture set. Handlers only see [`AdminDataSource`], so a real backing
//! store can be dropped in later.

use thiserror::Error;

use wishlist_core::{AppSettings, CustomerId, CustomerWishlist, WishlistStats};

const WISHLIST_FIXTURES: &str = include_str!("../fixtures/wishlists.json");

/// Errors from an admin data source.
#[derive(Debug, Error)]
pub enum DataSourceError {
    /// The backing data could not be decoded.
    #[error("corrupt data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// The backing store could not be reached.
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

/// Read access to admin data.
pub trait AdminDataSource: Send + Sync {
    /// Aggregate statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read.
    fn stats(&self) -> Result<WishlistStats, DataSourceError>;

    /// Every customer's wishlist summary.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read.
    fn wishlists(&self) -> Result<Vec<CustomerWishlist>, DataSourceError>;

    /// One customer's wishlist, if they have one.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read.
    fn customer_wishlist(
        &self,
        id: &CustomerId,
    ) -> Result<Option<CustomerWishlist>, DataSourceError> {
        Ok(self
            .wishlists()?
            .into_iter()
            .find(|wishlist| &wishlist.id == id))
    }

    /// Current app settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be read.
    fn settings(&self) -> Result<AppSettings, DataSourceError>;
}

/// Fixture-backed data source.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockDataSource;

impl MockDataSource {
    pub const STATS: WishlistStats = WishlistStats {
        total_users: 1542,
        total_wishlists: 987,
        total_wishlist_items: 4523,
        active_users: 234,
    };
}

impl AdminDataSource for MockDataSource {
    fn stats(&self) -> Result<WishlistStats, DataSourceError> {
        Ok(Self::STATS)
    }

    fn wishlists(&self) -> Result<Vec<CustomerWishlist>, DataSourceError> {
        Ok(serde_json::from_str(WISHLIST_FIXTURES)?)
    }

    fn settings(&self) -> Result<AppSettings, DataSourceError> {
        Ok(AppSettings::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_decode() {
        let wishlists = MockDataSource.wishlists().unwrap();
        assert_eq!(wishlists.len(), 3);
        assert_eq!(wishlists[0].customer_name, "John Doe");
        assert_eq!(wishlists[2].items[0].title, "Coffee Mug");
    }

    #[test]
    fn test_customer_lookup() {
        let jane = MockDataSource
            .customer_wishlist(&CustomerId::new("2"))
            .unwrap()
            .unwrap();
        assert_eq!(jane.customer_email, "jane@example.com");
        assert!(
            MockDataSource
                .customer_wishlist(&CustomerId::new("99"))
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_default_settings_are_valid() {
        MockDataSource.settings().unwrap().validate().unwrap();
    }
}
