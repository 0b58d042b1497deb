//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_backend;

use std::path::PathBuf;

use tempfile::TempDir;

use smartvas::config::{Backend, Config, ConfigStore, Defaults};
use smartvas::session::SessionStore;
use smartvas::ui::app::App;
use smartvas::ui::worker::ApiCommand;

/// Config pointed at an arbitrary origin with short test timeouts.
pub fn test_config(base_url: &str) -> Config {
    Config {
        defaults: Defaults {
            timeout_seconds: 5,
            connect_timeout_seconds: 2,
        },
        backend: Backend {
            base_url: base_url.to_string(),
        },
    }
}

/// Session store backed by a throwaway directory.
///
/// The TempDir must outlive the store, so it is returned alongside it.
pub fn temp_session_store() -> (TempDir, SessionStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = SessionStore::open(dir.path().join("session.json"));
    (dir, store)
}

/// Build an `App` wired to a throwaway session and a command channel whose
/// receiving end is handed back for asserting on dispatched API commands.
pub fn make_app() -> (App, tokio::sync::mpsc::Receiver<ApiCommand>, TempDir) {
    let (dir, session) = temp_session_store();
    let config = ConfigStore::new(
        test_config("http://127.0.0.1:9"),
        PathBuf::from("/tmp/smartvas-test.toml"),
    );
    let (tx, rx) = tokio::sync::mpsc::channel(8);
    (App::new(config, session, tx), rx, dir)
}
