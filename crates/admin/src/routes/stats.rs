//! Dashboard statistics.

use axum::{Json, extract::State};
use tracing::instrument;

use wishlist_core::WishlistStats;

use crate::error::AppError;
use crate::state::AppState;

/// Aggregate wishlist statistics.
///
/// GET /api/stats
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<WishlistStats>, AppError> {
    Ok(Json(state.data().stats()?))
}
