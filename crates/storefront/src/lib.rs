//! Wishlist Storefront library.
//!
//! The storefront half of the wishlist app: a state manager that owns the
//! shopper's wishlist, mirrors it to durable browser-side storage, and keeps
//! every presentation of it (toggle buttons, dropdown preview, wishlist page,
//! counters) in sync.
//!
//! # Architecture
//!
//! - [`manager::WishlistManager`] is explicitly constructed with its
//!   collaborators; there is no global instance
//! - [`storage`] abstracts the primary key-value store and the cookie mirror
//! - [`events::WishlistBus`] publishes a typed snapshot after every save
//! - [`render`] turns a wishlist into a render model and HTML fragments
//!   without touching the page; a [`render::Surface`] applies them
//! - [`cart`] talks to the storefront cart service

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod events;
pub mod manager;
pub mod notify;
pub mod persistence;
pub mod render;
pub mod storage;

pub use cart::{CartOutcome, CartService, HttpCartClient};
pub use config::WidgetConfig;
pub use manager::{ManagerParts, ToggleOutcome, UiEvent, WishlistManager};
pub use persistence::WishlistStorage;
