use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::HttpAppError;
use crate::handlers::MessageResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderQuery {
    folder_name: String,
}

/// Write a zero-byte marker at the canonical folder prefix so the folder is
/// visible in listings before anything is uploaded into it.
#[tracing::instrument(skip(state), fields(folder = %query.folder_name, operation = "create_folder"))]
pub async fn create_folder(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FolderQuery>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    state.storage.create_folder(&query.folder_name).await?;

    Ok(Json(MessageResponse {
        message: format!("Folder {} created successfully", query.folder_name),
    }))
}

/// List every key under a folder prefix. Marker keys are excluded; an empty
/// or unknown folder yields an empty array.
#[tracing::instrument(skip(state), fields(folder = %folder_name, operation = "list_files"))]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    Path(folder_name): Path<String>,
) -> Result<Json<Vec<String>>, HttpAppError> {
    let keys = state.storage.list_folder(&folder_name).await?;

    Ok(Json(keys))
}
