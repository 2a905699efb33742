//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use inventory_client::api::{ApiClient, UserProfile};
use inventory_client::app::InventoryApp;
use inventory_client::config::UiConfig;
use inventory_client::session::{
    save_session, KeyValueStore, MemoryStore, SecureString, Session, SessionContext,
};
use inventory_client::ui::AppState;
use tempfile::TempDir;

pub use mock_api::{CapturedRequest, MockApi, MockResponse};

/// Everything a controller test needs: the app, its store and the mock API.
pub struct Harness {
    pub app: InventoryApp,
    pub storage: Arc<MemoryStore>,
    pub api: MockApi,
}

impl Harness {
    pub async fn start() -> Self {
        Self::start_with(UiConfig::default()).await
    }

    pub async fn start_with(ui: UiConfig) -> Self {
        let api = MockApi::start().await;
        let storage = Arc::new(MemoryStore::new());
        let app = make_app(&api, storage.clone(), ui);
        Self { app, storage, api }
    }

    /// Start with a persisted session already in storage.
    pub async fn signed_in() -> Self {
        let harness = Self::start().await;
        persist_session(harness.storage.as_ref(), "stored-token", "alice");
        harness
    }

    pub fn state(&self) -> AppState {
        self.app.state()
    }
}

pub fn make_app(api: &MockApi, storage: Arc<dyn KeyValueStore>, ui: UiConfig) -> InventoryApp {
    let client = ApiClient::new(api.base_url(), SessionContext::new(), Duration::from_secs(2))
        .expect("Failed to build API client");
    InventoryApp::new(client, storage, ui)
}

pub fn persist_session(store: &dyn KeyValueStore, token: &str, username: &str) {
    let session = Session {
        token: SecureString::new(token),
        user: UserProfile::named(1, username),
    };
    save_session(store, &session).expect("Failed to persist session");
}

/// Short notification windows for timing tests.
pub fn fast_notices() -> UiConfig {
    UiConfig {
        search_debounce_ms: 500,
        success_notice_ms: 150,
        error_notice_ms: 300,
    }
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn user_json(id: i64, username: &str) -> String {
    format!(
        r#"{{"id":{},"username":"{}","email":"{}@example.com","first_name":"","last_name":""}}"#,
        id, username, username
    )
}

pub fn login_body(token: &str, username: &str) -> String {
    format!(
        r#"{{"tokens":{{"access":"{}","refresh":"r-{}"}},"user":{},"message":"ok"}}"#,
        token,
        token,
        user_json(1, username)
    )
}

pub fn record_json(id: i64, serial: &str) -> String {
    format!(
        r#"{{"id":{},"equipment_type":1,"equipment_type_name":"Router","serial_number":"{}","note":"","created_at":"2024-03-05T09:07:00Z","updated_at":"2024-03-05T09:07:00Z"}}"#,
        id, serial
    )
}

pub fn page_json(records: &[(i64, &str)], count: u64, next: bool, previous: bool) -> String {
    let results: Vec<String> = records
        .iter()
        .map(|(id, serial)| record_json(*id, serial))
        .collect();
    format!(
        r#"{{"results":[{}],"count":{},"next":{},"previous":{}}}"#,
        results.join(","),
        count,
        if next { r#""http://api.test/equipment/?page=next""# } else { "null" },
        if previous { r#""http://api.test/equipment/?page=prev""# } else { "null" },
    )
}
