//! The wishlist state manager.
//!
//! Owns the in-memory [`Wishlist`] for the lifetime of a page. Every mutation
//! runs to completion synchronously: update the list, save it, refresh the
//! surface, then notify the shopper. The only suspension point is
//! [`WishlistManager::add_to_cart`].

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use wishlist_core::{ProductDescriptor, ProductId, Wishlist, WishlistEntry};

use crate::cart::{self, CartOutcome, CartService};
use crate::events::WishlistBus;
use crate::notify::{Confirmer, Notifier, Toast, messages};
use crate::persistence::WishlistStorage;
use crate::render::{Frame, Surface};

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

/// Page interactions the manager reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// A wishlist button was clicked; carries the button's product data.
    ToggleClicked(ProductDescriptor),
    /// The dropdown trigger was clicked.
    DropdownTrigger,
    /// A click landed outside the dropdown wrapper.
    ClickOutside,
    /// A remove control inside a rendered entry was clicked.
    RemoveClicked(ProductId),
    /// The clear-all control was clicked.
    ClearClicked,
    /// An add-to-cart control inside a rendered entry was clicked.
    AddToCartClicked(ProductId),
    /// The page was hidden or shown again.
    VisibilityChanged { hidden: bool },
}

/// Collaborators a manager is built from.
pub struct ManagerParts<S> {
    pub storage: WishlistStorage,
    pub surface: S,
    pub bus: WishlistBus,
    pub notifier: Arc<dyn Notifier>,
    pub confirmer: Box<dyn Confirmer>,
}

/// Wishlist state manager for one page.
pub struct WishlistManager<S: Surface> {
    wishlist: Wishlist,
    storage: WishlistStorage,
    surface: S,
    bus: WishlistBus,
    notifier: Arc<dyn Notifier>,
    confirmer: Box<dyn Confirmer>,
    clock: fn() -> DateTime<Utc>,
}

impl<S: Surface + std::fmt::Debug> std::fmt::Debug for WishlistManager<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistManager")
            .field("wishlist", &self.wishlist)
            .field("storage", &self.storage)
            .field("surface", &self.surface)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> WishlistManager<S> {
    /// Load the stored wishlist and draw it onto the surface.
    #[must_use]
    pub fn new(parts: ManagerParts<S>) -> Self {
        let ManagerParts {
            storage,
            surface,
            bus,
            notifier,
            confirmer,
        } = parts;

        let wishlist = storage.load();
        debug!(key = storage.key(), count = wishlist.len(), "Wishlist loaded");

        let mut manager = Self {
            wishlist,
            storage,
            surface,
            bus,
            notifier,
            confirmer,
            clock: Utc::now,
        };
        manager.refresh();
        manager
    }

    /// Replace the source of `addedAt` timestamps.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    /// Re-read durable storage, replacing the in-memory wishlist.
    ///
    /// Does not refresh the surface; see [`Self::reload`].
    pub fn load(&mut self) -> &Wishlist {
        self.wishlist = self.storage.load();
        &self.wishlist
    }

    /// Persist the wishlist and publish it on the bus.
    ///
    /// Failures are logged and leave the in-memory wishlist as it is.
    pub fn save(&mut self) {
        match self.storage.save(&self.wishlist, (self.clock)()) {
            Ok(()) => {
                self.bus.publish(&self.wishlist);
            }
            Err(e) => {
                warn!(key = self.storage.key(), error = %e, "Failed to save wishlist");
            }
        }
    }

    /// Add the product if absent, remove it if present.
    pub fn toggle(&mut self, product: ProductDescriptor) -> ToggleOutcome {
        let outcome = if self.wishlist.remove(&product.id).is_some() {
            ToggleOutcome::Removed
        } else {
            let now = (self.clock)();
            self.wishlist.insert(product, now);
            ToggleOutcome::Added
        };

        self.commit();
        self.notifier.notify(Toast::success(match outcome {
            ToggleOutcome::Added => messages::ADDED,
            ToggleOutcome::Removed => messages::REMOVED,
        }));
        outcome
    }

    /// Remove a product, naming it in the notification.
    ///
    /// Absent ids are ignored without a notification.
    pub fn remove(&mut self, id: &ProductId) -> Option<WishlistEntry> {
        let removed = self.wishlist.remove(id)?;
        self.commit();
        self.notifier
            .notify(Toast::success(messages::removed_named(&removed.title)));
        Some(removed)
    }

    /// Empty the wishlist after the shopper confirms.
    ///
    /// Returns `false` without prompting if the wishlist is already empty,
    /// and `false` if the shopper declines.
    pub fn clear(&mut self) -> bool {
        if self.wishlist.is_empty() {
            return false;
        }
        if !self.confirmer.confirm(messages::CONFIRM_CLEAR) {
            debug!("Clear declined");
            return false;
        }

        self.wishlist.clear();
        self.commit();
        self.notifier.notify(Toast::success(messages::CLEARED));
        true
    }

    /// Add one unit of a product to the cart.
    ///
    /// The wishlist is never changed. On success the surface's cart counters
    /// are updated if the new count could be read.
    pub async fn add_to_cart<C: CartService>(&mut self, cart: &C, id: &ProductId) -> CartOutcome {
        let outcome = cart::add_to_cart(cart, self.notifier.as_ref(), id).await;
        if let CartOutcome::Added {
            item_count: Some(count),
        } = outcome
        {
            self.surface.set_cart_count(count);
        }
        outcome
    }

    #[must_use]
    pub fn is_in_wishlist(&self, id: &ProductId) -> bool {
        self.wishlist.contains(id)
    }

    /// A copy of the current entries, most recent first.
    #[must_use]
    pub fn wishlist(&self) -> Vec<WishlistEntry> {
        self.wishlist.as_slice().to_vec()
    }

    /// Add a product unless it is already present. No notification.
    pub fn add_entry(&mut self, product: ProductDescriptor) -> bool {
        let now = (self.clock)();
        if !self.wishlist.insert(product, now) {
            return false;
        }
        self.commit();
        true
    }

    /// Remove a product if present. No notification.
    pub fn remove_entry(&mut self, id: &ProductId) -> bool {
        if self.wishlist.remove(id).is_none() {
            return false;
        }
        self.commit();
        true
    }

    /// Redraw every wishlist element on the surface.
    pub fn refresh(&mut self) {
        match Frame::build(&self.wishlist) {
            Ok(frame) => frame.apply(&mut self.surface),
            Err(e) => warn!(error = %e, "Failed to render wishlist"),
        }
    }

    /// Reload from durable storage and redraw, picking up other tabs' writes.
    pub fn reload(&mut self) {
        self.load();
        debug!(count = self.wishlist.len(), "Wishlist reloaded");
        self.refresh();
    }

    /// Open the dropdown if closed, close it if open.
    pub fn toggle_dropdown(&mut self) {
        if let Some(open) = self.surface.dropdown_open() {
            self.surface.set_dropdown_open(!open);
        }
    }

    pub fn close_dropdown(&mut self) {
        if self.surface.dropdown_open().is_some() {
            self.surface.set_dropdown_open(false);
        }
    }

    /// React to a page interaction.
    ///
    /// Add-to-cart is asynchronous, so it is handed back to the caller as the
    /// product id to pass to [`Self::add_to_cart`].
    pub fn handle(&mut self, event: UiEvent) -> Option<ProductId> {
        match event {
            UiEvent::ToggleClicked(product) => {
                self.toggle(product);
            }
            UiEvent::DropdownTrigger => self.toggle_dropdown(),
            UiEvent::ClickOutside => self.close_dropdown(),
            UiEvent::RemoveClicked(id) => {
                self.remove(&id);
            }
            UiEvent::ClearClicked => {
                self.clear();
            }
            UiEvent::AddToCartClicked(id) => return Some(id),
            UiEvent::VisibilityChanged { hidden: false } => self.reload(),
            UiEvent::VisibilityChanged { hidden: true } => {}
        }
        None
    }

    #[must_use]
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub const fn bus(&self) -> &WishlistBus {
        &self.bus
    }

    fn commit(&mut self) {
        self.save();
        self.refresh();
        info!(count = self.wishlist.len(), "Wishlist updated");
    }
}
