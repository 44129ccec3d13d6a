use crate::configs::{ConfigError, PartialConfig, provider::ConfigProvider};
use crate::core::merge_request::{DEFAULT_REMOTE, DEFAULT_SCHEME};

/// Provider for the default configuration values
///
/// Always returns every setting: remote `origin`, scheme `http`, browser on.
/// This provider should be last in the priority chain as a fallback.
pub struct DefaultProvider;

impl ConfigProvider for DefaultProvider {
    fn load(&self) -> Result<PartialConfig, ConfigError> {
        Ok(PartialConfig {
            remote: Some(DEFAULT_REMOTE.to_string()),
            scheme: Some(DEFAULT_SCHEME.to_string()),
            open_browser: Some(true),
        })
    }
}
