//! Wishlist Core - Shared types library.
//!
//! This crate provides common types used across all wishlist components:
//! - `storefront` - The storefront wishlist state manager
//! - `admin` - Embedded admin backend (statistics, settings, customer wishlists)
//! - `cli` - Command-line driver that owns the page lifecycle
//!
//! # Architecture
//!
//! The core crate contains only types and pure operations - no I/O, no storage
//! access, no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product ids, tagged prices, wishlist entries, and wire types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
