//! Health check handlers.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use std::time::Duration;

/// Health check: verifies the storage backend answers a cheap list call.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    const TIMEOUT: Duration = Duration::from_secs(5);

    let storage = state.storage.clone();
    let storage_status =
        match tokio::time::timeout(TIMEOUT, storage.list_folder("health-check")).await {
            Ok(Ok(_)) => "healthy".to_string(),
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Storage health check failed");
                format!("degraded: {}", e)
            }
            Err(_) => {
                tracing::warn!("Storage health check timed out");
                "timeout".to_string()
            }
        };

    let healthy = storage_status == "healthy";
    let status_code = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": if healthy { "healthy" } else { "degraded" },
            "storage": storage_status,
            "backend": state.storage.backend_type().to_string(),
        })),
    )
}
