//! Route handlers for admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//!
//! # Dashboard API
//! GET  /api/stats              - Aggregate wishlist statistics
//! GET  /api/wishlists          - Every customer's wishlist
//! GET  /api/wishlists/{id}     - One customer's wishlist
//! GET  /api/settings           - App settings
//! POST /api/settings           - Validate and echo settings (not persisted)
//! POST /api/wishlist/customer  - Accept a customer's wishlist upload (not stored)
//!
//! # Dashboard bundle
//! GET  /*                      - Static files, falling back to index.html
//! ```

pub mod customers;
pub mod health;
pub mod settings;
pub mod stats;
pub mod wishlists;

use std::path::Path;

use axum::routing::{any, get, post};
use axum::{Router, http::Uri};
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::error::AppError;
use crate::state::AppState;

/// JSON API and health routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/stats", get(stats::show))
        .route("/api/wishlists", get(wishlists::index))
        .route("/api/wishlists/{id}", get(wishlists::show))
        .route("/api/settings", get(settings::show).post(settings::save))
        .route("/api/wishlist/customer", post(customers::save_wishlist))
        .route("/api/{*path}", any(api_not_found))
}

/// The full application: API routes, the dashboard bundle and CORS.
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();
    routes()
        .fallback_service(dashboard_service(&static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the dashboard bundle with SPA fallback to `index.html`.
fn dashboard_service(dir: &Path) -> ServeDir<ServeFile> {
    ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html")))
}

async fn api_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
