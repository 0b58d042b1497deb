use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub backend: Backend,
}

/// Default settings for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Backend origin for the SmartVAS REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backend {
    /// Base URL of the backend (e.g. "https://vas.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_request_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timeout_seconds: default_request_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: Defaults::default(),
            backend: Backend::default(),
        }
    }
}
