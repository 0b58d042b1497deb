use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal client for the SmartVAS OTP authentication flow.
#[derive(Debug, Parser)]
#[command(name = "smartvas", version, about)]
pub struct Cli {
    /// Path to the configuration file.
    ///
    /// Defaults to `smartvas/config.toml` under the platform config directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the backend origin from the config file.
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(base_url) = &self.base_url {
            config.backend.base_url = base_url.clone();
        }
    }
}
