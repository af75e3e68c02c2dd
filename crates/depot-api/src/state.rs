//! Application state.

use depot_core::Config;
use depot_storage::Storage;
use std::sync::Arc;

/// Main application state: the storage gateway and process configuration.
///
/// Both fields are immutable for the process lifetime, so the state is safe
/// to share across any number of concurrent requests.
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    pub config: Config,
}

fn _assert_app_state_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}
    assert_send::<AppState>();
    assert_sync::<AppState>();
}
