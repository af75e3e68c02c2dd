use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    Json,
};
use depot_core::constants::MAX_PRESIGN_EXPIRY_MINUTES;
use depot_core::AppError;
use serde::{Deserialize, Serialize};

use crate::error::HttpAppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignQuery {
    file_name: String,
    expires_in_minutes: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UrlResponse {
    pub url: String,
}

/// Generate a time-limited download URL for a key.
///
/// The URL is signed locally; the object's existence is not checked.
#[tracing::instrument(skip(state), fields(key = %query.file_name, operation = "get_download_url"))]
pub async fn get_download_url(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PresignQuery>,
) -> Result<Json<UrlResponse>, HttpAppError> {
    let expires_in_minutes = query
        .expires_in_minutes
        .unwrap_or(state.config.presign_expiry_minutes);

    if expires_in_minutes == 0 || expires_in_minutes > MAX_PRESIGN_EXPIRY_MINUTES {
        return Err(HttpAppError(AppError::InvalidInput(format!(
            "expiresInMinutes must be between 1 and {}",
            MAX_PRESIGN_EXPIRY_MINUTES
        ))));
    }

    let url = state
        .storage
        .presigned_url(
            &query.file_name,
            Duration::from_secs(expires_in_minutes * 60),
        )
        .await?;

    Ok(Json(UrlResponse { url }))
}
