//! Depot Storage Library
//!
//! Storage abstraction and backends for the Depot gateway. It includes the
//! [`Storage`] trait and implementations for S3-compatible services and the
//! local filesystem.
//!
//! # Key format
//!
//! Object keys are flat strings; "folders" exist only as shared key prefixes:
//!
//! - **Upload**: `{uuid}-{original_filename}`
//! - **Folder prefix**: `{folder_name}/` (exactly one trailing separator)
//! - **Folder upload**: `{folder_name}/{uuid}{.ext}` (original base name
//!   discarded, extension kept)
//!
//! Keys must not contain `..` or a leading `/`. Key generation is centralized
//! in the [`keys`] module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use depot_core::StorageBackend;
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
