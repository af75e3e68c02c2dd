pub mod download;
pub mod folders;
pub mod health;
pub mod presign;
pub mod upload;

use serde::Serialize;

/// Response body for operations that return a stored key.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileNameResponse {
    pub file_name: String,
}

/// Response body for operations that only confirm an action.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}
