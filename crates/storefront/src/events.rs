//! Typed publish/subscribe for wishlist changes.
//!
//! After every successful save the manager publishes a
//! [`WishlistUpdated`] carrying the full snapshot. Any number of observers
//! may subscribe; there is no acknowledgement and no backpressure. A
//! receiver that falls more than [`BUS_CAPACITY`] events behind skips ahead
//! (`RecvError::Lagged`), which is harmless because every event is a full
//! snapshot.

use tokio::sync::broadcast;

use wishlist_core::Wishlist;

/// Events buffered per receiver before the oldest are dropped.
pub const BUS_CAPACITY: usize = 16;

/// The wishlist changed and was persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistUpdated {
    pub wishlist: Wishlist,
}

/// Process-wide "wishlist updated" channel.
///
/// Cheap to clone; clones publish into the same channel.
#[derive(Debug, Clone)]
pub struct WishlistBus {
    sender: broadcast::Sender<WishlistUpdated>,
}

impl WishlistBus {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BUS_CAPACITY);
        Self { sender }
    }

    /// Subscribe to future updates.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<WishlistUpdated> {
        self.sender.subscribe()
    }

    /// Publish a snapshot. Returns the number of subscribers reached.
    pub fn publish(&self, wishlist: &Wishlist) -> usize {
        self.sender
            .send(WishlistUpdated {
                wishlist: wishlist.clone(),
            })
            .unwrap_or(0)
    }
}

impl Default for WishlistBus {
    fn default() -> Self {
        Self::new()
    }
}
