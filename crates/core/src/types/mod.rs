//! Core types for the wishlist.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod admin;
pub mod cart;
pub mod entry;
pub mod id;
pub mod price;
pub mod wishlist;

pub use admin::{AppSettings, CustomerWishlist, CustomerWishlistItem, SettingsError, WishlistStats};
pub use cart::{CartAddRequest, CartAddResponse, CartLine, CartLineInput, CartState};
pub use entry::{ProductDescriptor, WishlistEntry};
pub use id::*;
pub use price::{CurrencyCode, Price, PriceError};
pub use wishlist::Wishlist;
