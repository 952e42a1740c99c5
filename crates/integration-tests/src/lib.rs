//! Integration tests for the Shopify wishlist.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p wishlist-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `admin_api` - Admin API served over a real socket
//! - `storefront_cart` - Wishlist manager against a mock cart service
//!
//! Every test binds its own server on `127.0.0.1:0`; nothing external is
//! required.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

/// Serve `app` on an ephemeral local port and return its address.
///
/// The server runs until the test's runtime shuts down.
///
/// # Panics
///
/// Panics if the listener cannot be bound.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read test listener address");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    addr
}
