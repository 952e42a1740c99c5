//! Wishlist Admin library.
//!
//! The admin backend behind the embedded dashboard: read endpoints for
//! statistics, customer wishlists and app settings, plus write endpoints that
//! validate and log. There is no wishlist database; data comes from an
//! [`data::AdminDataSource`], currently fixture-backed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod data;
pub mod error;
pub mod routes;
pub mod state;

pub use routes::app;
