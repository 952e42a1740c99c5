//! App settings.
//!
//! Saving validates and echoes the submitted settings; nothing is persisted.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::Serialize;
use tracing::{info, instrument};

use wishlist_core::AppSettings;

use crate::error::AppError;
use crate::state::AppState;

/// Response for a settings save.
#[derive(Debug, Serialize)]
pub struct SaveSettingsResponse {
    pub success: bool,
    pub settings: AppSettings,
}

/// Current app settings.
///
/// GET /api/settings
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Json<AppSettings>, AppError> {
    Ok(Json(state.data().settings()?))
}

/// Validate and echo settings.
///
/// POST /api/settings
#[instrument(skip_all)]
pub async fn save(
    payload: Result<Json<AppSettings>, JsonRejection>,
) -> Result<Json<SaveSettingsResponse>, AppError> {
    let Json(settings) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    settings.validate()?;

    info!(?settings, "Saving settings");

    Ok(Json(SaveSettingsResponse {
        success: true,
        settings,
    }))
}
