use std::sync::Arc;

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::HttpAppError;
use crate::handlers::FileNameResponse;
use crate::state::AppState;
use crate::utils::multipart::extract_multipart_file;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderQuery {
    folder_name: String,
}

/// Upload a file to the bucket root.
///
/// The stored key is `{uuid}-{original_filename}` and is returned to the
/// caller for later download or presigning.
#[tracing::instrument(skip(state, multipart), fields(operation = "upload_file"))]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<FileNameResponse>, HttpAppError> {
    let file = extract_multipart_file(multipart).await?;

    let key = state
        .storage
        .upload(&file.filename, &file.content_type, file.data)
        .await?;

    Ok(Json(FileNameResponse { file_name: key }))
}

/// Upload a file under a folder prefix.
///
/// The stored key keeps only the extension of the uploaded filename:
/// `{folder}/{uuid}{.ext}`.
#[tracing::instrument(
    skip(state, multipart),
    fields(folder = %query.folder_name, operation = "upload_to_folder")
)]
pub async fn upload_file_to_folder(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FolderQuery>,
    multipart: Multipart,
) -> Result<Json<FileNameResponse>, HttpAppError> {
    let file = extract_multipart_file(multipart).await?;

    let key = state
        .storage
        .upload_to_folder(
            &query.folder_name,
            &file.filename,
            &file.content_type,
            file.data,
        )
        .await?;

    Ok(Json(FileNameResponse { file_name: key }))
}
