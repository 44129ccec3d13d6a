use std::path::PathBuf;

use crate::configs::{ConfigError, PartialConfig, provider::ConfigProvider};

const REMOTE_KEY: &str = "bugflow.remote";
const SCHEME_KEY: &str = "bugflow.scheme";
const OPEN_BROWSER_KEY: &str = "bugflow.openBrowser";

/// Provider for ~/.gitconfig configuration
///
/// Reads the `[bugflow]` section in the global git configuration.
///
/// Example configuration:
///
/// ```ini
/// [bugflow]
///     remote = origin
///     scheme = https
///     openBrowser = false
/// ```
pub struct GitConfigProvider {
    path: Option<PathBuf>,
}

impl GitConfigProvider {
    /// Read the user's default git configuration
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Read a specific git configuration file
    #[cfg(test)]
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn open(&self) -> Result<Option<git2::Config>, ConfigError> {
        let result = match &self.path {
            Some(path) => git2::Config::open(path),
            None => git2::Config::open_default(),
        };

        match result {
            Ok(config) => Ok(Some(config)),
            // If .gitconfig doesn't exist, skip to next provider
            Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
            Err(e) => Err(ConfigError::GitConfig(e.to_string())),
        }
    }
}

fn optional<T>(result: Result<T, git2::Error>) -> Result<Option<T>, ConfigError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(ConfigError::GitConfig(e.to_string())),
    }
}

impl ConfigProvider for GitConfigProvider {
    fn load(&self) -> Result<PartialConfig, ConfigError> {
        let Some(config) = self.open()? else {
            return Ok(PartialConfig::default());
        };

        Ok(PartialConfig {
            remote: optional(config.get_string(REMOTE_KEY))?,
            scheme: optional(config.get_string(SCHEME_KEY))?,
            open_browser: optional(config.get_bool(OPEN_BROWSER_KEY))?,
        })
    }
}
