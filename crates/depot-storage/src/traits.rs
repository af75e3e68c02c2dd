//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use async_trait::async_trait;
use depot_core::StorageBackend;
use std::time::Duration;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Each operation forwards to exactly one backend call; there is no caching,
/// no retry, and no cross-operation state. Conflicting writes to the same key
/// are resolved by the backend (last write wins).
///
/// **Key format:** see the crate root documentation and the [`crate::keys`]
/// module.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload a payload under a freshly generated key
    /// (`{uuid}-{original_filename}`) and return that key.
    async fn upload(
        &self,
        original_filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String>;

    /// Upload a payload under a folder prefix. The stored key is
    /// `{folder}/{uuid}{.ext}`; the original base filename is discarded.
    async fn upload_to_folder(
        &self,
        folder_name: &str,
        original_filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String>;

    /// Download the full payload for a key into memory.
    async fn download(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Delete an object. Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Write a zero-byte marker object at the canonical folder prefix so an
    /// otherwise-empty folder shows up in listings. Returns the folder key.
    async fn create_folder(&self, folder_name: &str) -> StorageResult<String>;

    /// List every key under the canonical folder prefix, excluding marker
    /// keys (anything ending in `/`). An empty or absent folder yields an
    /// empty list.
    async fn list_folder(&self, folder_name: &str) -> StorageResult<Vec<String>>;

    /// Generate a time-limited signed URL for direct GET access.
    ///
    /// The URL is computed locally from the configured credentials; the
    /// backend is not contacted and the key's existence is not verified.
    async fn presigned_url(&self, key: &str, expires_in: Duration) -> StorageResult<String>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
