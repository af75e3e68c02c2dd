//! Storage setup and initialization

use anyhow::Result;
use depot_core::Config;
use depot_storage::{create_storage, Storage};
use std::sync::Arc;

/// Setup the storage backend from configuration.
pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage backend...");
    let storage = create_storage(config).await?;

    tracing::info!(
        backend = %storage.backend_type(),
        bucket = ?config.s3_bucket,
        endpoint = ?config.s3_endpoint,
        "Storage backend initialized successfully"
    );

    Ok(storage)
}
