//! Test helpers: build the application router over a temp-dir local backend.
//!
//! Run from workspace root: `cargo test -p depot-api`.

use axum_test::TestServer;
use depot_api::setup::routes::setup_routes;
use depot_api::state::AppState;
use depot_core::{Config, StorageBackend};
use depot_storage::{LocalStorage, Storage};
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_BASE_URL: &str = "http://localhost:8080/files";

/// Test application: server and owned storage directory.
pub struct TestApp {
    pub server: TestServer,
    _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }
}

fn test_config(temp_dir: &TempDir) -> Config {
    Config {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec![],
        storage_backend: StorageBackend::Local,
        s3_bucket: None,
        s3_region: None,
        s3_endpoint: None,
        aws_access_key_id: None,
        aws_secret_access_key: None,
        local_storage_path: Some(temp_dir.path().to_string_lossy().to_string()),
        local_storage_base_url: Some(TEST_BASE_URL.to_string()),
        max_upload_size_bytes: 10 * 1024 * 1024,
        presign_expiry_minutes: 60,
    }
}

/// Setup a test app with isolated local storage.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = test_config(&temp_dir);

    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path().to_path_buf(), TEST_BASE_URL.to_string())
            .await
            .expect("Failed to create local storage"),
    );

    let state = Arc::new(AppState {
        storage,
        config: config.clone(),
    });

    let router = setup_routes(&config, state).expect("Failed to build routes");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        _temp_dir: temp_dir,
    }
}
