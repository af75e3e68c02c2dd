//! Configuration module
//!
//! Process-wide settings for the gateway: server, storage backend, and
//! credentials. Loaded once from the environment at startup and immutable
//! thereafter.

use std::env;
use std::str::FromStr;

use crate::constants::{DEFAULT_MAX_UPLOAD_SIZE_BYTES, DEFAULT_PRESIGN_EXPIRY_MINUTES};
use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 8080;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub environment: String,
    pub cors_origins: Vec<String>,
    // Storage configuration
    pub storage_backend: StorageBackend,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers (MinIO, etc.)
    pub aws_access_key_id: Option<String>,
    pub aws_secret_access_key: Option<String>,
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Request limits
    pub max_upload_size_bytes: usize,
    pub presign_expiry_minutes: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let storage_backend = match env::var("STORAGE_BACKEND") {
            Ok(s) => StorageBackend::from_str(&s)?,
            Err(_) => StorageBackend::S3,
        };

        let config = Config {
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_SERVER_PORT),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            cors_origins: env::var("CORS_ORIGINS")
                .unwrap_or_default()
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok().or(env::var("AWS_REGION").ok()),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            aws_access_key_id: env::var("AWS_ACCESS_KEY_ID").ok(),
            aws_secret_access_key: env::var("AWS_SECRET_ACCESS_KEY").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            max_upload_size_bytes: env::var("MAX_UPLOAD_SIZE_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_BYTES),
            presign_expiry_minutes: env::var("PRESIGN_EXPIRY_MINUTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PRESIGN_EXPIRY_MINUTES),
        };

        config.validate()?;
        Ok(config)
    }

    /// Fail fast on settings the selected backend cannot run without.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            StorageBackend::S3 => {
                if self.s3_bucket.is_none() {
                    anyhow::bail!("S3_BUCKET must be set when using the S3 storage backend");
                }
                if self.s3_region.is_none() {
                    anyhow::bail!(
                        "S3_REGION or AWS_REGION must be set when using the S3 storage backend"
                    );
                }
            }
            StorageBackend::Local => {
                if self.local_storage_path.is_none() {
                    anyhow::bail!(
                        "LOCAL_STORAGE_PATH must be set when using the local storage backend"
                    );
                }
            }
        }

        if self.max_upload_size_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_SIZE_BYTES must be greater than zero");
        }
        if self.presign_expiry_minutes == 0 {
            anyhow::bail!("PRESIGN_EXPIRY_MINUTES must be greater than zero");
        }

        Ok(())
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s3_config() -> Config {
        Config {
            server_port: 8080,
            environment: "development".to_string(),
            cors_origins: vec![],
            storage_backend: StorageBackend::S3,
            s3_bucket: Some("uploads".to_string()),
            s3_region: Some("us-east-1".to_string()),
            s3_endpoint: Some("http://localhost:9000".to_string()),
            aws_access_key_id: Some("minio".to_string()),
            aws_secret_access_key: Some("minio123".to_string()),
            local_storage_path: None,
            local_storage_base_url: None,
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            presign_expiry_minutes: DEFAULT_PRESIGN_EXPIRY_MINUTES,
        }
    }

    #[test]
    fn validate_accepts_complete_s3_config() {
        assert!(s3_config().validate().is_ok());
    }

    #[test]
    fn validate_requires_bucket_for_s3() {
        let mut config = s3_config();
        config.s3_bucket = None;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("S3_BUCKET"));
    }

    #[test]
    fn validate_requires_path_for_local() {
        let mut config = s3_config();
        config.storage_backend = StorageBackend::Local;
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("LOCAL_STORAGE_PATH"));
    }

    #[test]
    fn production_detection() {
        let mut config = s3_config();
        assert!(!config.is_production());
        config.environment = "Production".to_string();
        assert!(config.is_production());
    }
}
