//! Configuration management for bugflow
//!
//! This module provides a unified `Config` struct that loads settings from
//! multiple sources in priority order. The internal provider implementations
//! are private to enforce the standard configuration loading pattern.
//!
//! # Configuration Priority
//!
//! 1. Environment variables `BUGFLOW_REMOTE`, `BUGFLOW_SCHEME`, `BUGFLOW_OPEN_BROWSER`
//! 2. `~/.bugflowrc` (TOML format)
//! 3. `~/.gitconfig` ([bugflow] section)
//! 4. Defaults: remote `origin`, scheme `http`, open the browser
//!
//! Each setting is resolved independently: the first source defining it wins.

// Internal provider implementations (private)
mod default_provider;
mod env_provider;
mod gitconfig_provider;
mod rc_provider;
pub(crate) mod provider; // Available within crate for testing

use std::sync::Arc;
use thiserror::Error;

use crate::core::MergeRequestSettings;
use crate::core::ports::{FileSystem, FileSystemError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Git config error: {0}")]
    GitConfig(String),

    #[error("Environment variable error: {0}")]
    Env(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),
}

/// Settings as found in a single configuration source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfig {
    pub remote: Option<String>,
    pub scheme: Option<String>,
    pub open_browser: Option<bool>,
}

impl PartialConfig {
    /// Fill the settings missing here from `lower`
    fn or(self, lower: PartialConfig) -> PartialConfig {
        PartialConfig {
            remote: self.remote.or(lower.remote),
            scheme: self.scheme.or(lower.scheme),
            open_browser: self.open_browser.or(lower.open_browser),
        }
    }
}

/// bugflow configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Remote whose push URL locates the merge request page
    pub remote: String,
    /// Scheme of merge request URLs
    pub scheme: String,
    /// Open merge request URLs in the browser (they are printed either way)
    pub open_browser: bool,
}

impl Config {
    /// Load configuration from the environment, `~/.bugflowrc`, `~/.gitconfig`
    /// and defaults, in that priority order
    pub fn load(fs: Arc<dyn FileSystem>) -> Result<Self, ConfigError> {
        use provider::ConfigProvider;

        // Build the provider chain in priority order
        let providers: Vec<Box<dyn ConfigProvider>> = vec![
            Box::new(env_provider::EnvProvider::new()),
            Box::new(rc_provider::RcProvider::new(fs)),
            Box::new(gitconfig_provider::GitConfigProvider::new()),
            Box::new(default_provider::DefaultProvider),
        ];

        Self::from_providers(&providers)
    }

    fn from_providers(providers: &[Box<dyn provider::ConfigProvider>]) -> Result<Self, ConfigError> {
        let mut merged = PartialConfig::default();

        for provider in providers {
            // Parse error - stop immediately
            merged = merged.or(provider.load()?);
        }

        match merged {
            PartialConfig {
                remote: Some(remote),
                scheme: Some(scheme),
                open_browser: Some(open_browser),
            } => Ok(Config {
                remote,
                scheme,
                open_browser,
            }),
            // DefaultProvider fills every setting
            _ => Err(ConfigError::Parse("Incomplete configuration".into())),
        }
    }

    pub fn merge_request_settings(&self) -> MergeRequestSettings {
        MergeRequestSettings {
            remote: self.remote.clone(),
            scheme: self.scheme.clone(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        let settings = MergeRequestSettings::default();
        Self {
            remote: settings.remote,
            scheme: settings.scheme,
            open_browser: true,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
