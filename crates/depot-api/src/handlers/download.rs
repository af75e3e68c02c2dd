use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use depot_core::AppError;
use serde::Deserialize;

use crate::error::HttpAppError;
use crate::handlers::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileQuery {
    file_name: String,
}

/// The filename a browser should save a key as: the last path segment, so
/// folder uploads don't leak the prefix into the suggested name.
fn attachment_filename(key: &str) -> &str {
    key.rsplit('/').next().unwrap_or(key)
}

/// Proxy a stored object back to the caller as an attachment.
#[tracing::instrument(skip(state), fields(key = %query.file_name, operation = "download_file"))]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileQuery>,
) -> Result<impl IntoResponse, HttpAppError> {
    let data = state.storage.download(&query.file_name).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/octet-stream")
        .header(
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                attachment_filename(&query.file_name)
            ),
        )
        .body(Body::from(data))
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to build response");
            HttpAppError(AppError::Internal(e.to_string()))
        })?;

    Ok(response)
}

/// Remove a stored object. Deleting an absent key succeeds.
#[tracing::instrument(skip(state), fields(key = %query.file_name, operation = "delete_file"))]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileQuery>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    state.storage.delete(&query.file_name).await?;

    Ok(Json(MessageResponse {
        message: format!("File {} deleted successfully", query.file_name),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_filename_strips_folder_prefix() {
        assert_eq!(attachment_filename("reports/abc.png"), "abc.png");
        assert_eq!(attachment_filename("abc-a.txt"), "abc-a.txt");
    }
}
