//! Customer wishlist uploads.
//!
//! The storefront may push a signed-in customer's wishlist here. There is no
//! server-side wishlist storage, so the upload is logged and dropped.

use axum::{Json, extract::rejection::JsonRejection};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use wishlist_core::CustomerId;

use crate::error::AppError;

/// Body of a customer wishlist upload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWishlistUpload {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub wishlist_data: serde_json::Value,
}

/// Acknowledgement body.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Accept a customer's wishlist.
///
/// POST /api/wishlist/customer
#[instrument(skip_all)]
pub async fn save_wishlist(
    payload: Result<Json<CustomerWishlistUpload>, JsonRejection>,
) -> Result<Json<SuccessResponse>, AppError> {
    let Json(upload) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    info!(
        customer_id = %upload.customer_id,
        wishlist = %upload.wishlist_data,
        "Saving wishlist for customer"
    );

    Ok(Json(SuccessResponse { success: true }))
}
