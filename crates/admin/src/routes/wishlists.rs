//! Customer wishlist listings.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::instrument;

use wishlist_core::{CustomerId, CustomerWishlist};

use crate::error::AppError;
use crate::state::AppState;

/// Every customer's wishlist.
///
/// GET /api/wishlists
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<CustomerWishlist>>, AppError> {
    Ok(Json(state.data().wishlists()?))
}

/// One customer's wishlist.
///
/// GET /api/wishlists/{id}
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<CustomerId>,
) -> Result<Json<CustomerWishlist>, AppError> {
    state
        .data()
        .customer_wishlist(&id)?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("wishlist for customer {id}")))
}
