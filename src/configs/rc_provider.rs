use std::sync::Arc;

use serde::Deserialize;

use crate::configs::{ConfigError, PartialConfig, provider::ConfigProvider};
use crate::core::ports::FileSystem;

pub const RC_FILE_NAME: &str = ".bugflowrc";

/// TOML structure for .bugflowrc file
#[derive(Debug, Deserialize)]
struct RcFile {
    remote: Option<String>,
    scheme: Option<String>,
    open_browser: Option<bool>,
}

/// Provider for ~/.bugflowrc configuration file
///
/// Reads and parses a TOML file at `~/.bugflowrc` with the following format:
///
/// ```toml
/// remote = "origin"
/// scheme = "https"
/// open_browser = false
/// ```
pub struct RcProvider {
    fs: Arc<dyn FileSystem>,
}

impl RcProvider {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl ConfigProvider for RcProvider {
    fn load(&self) -> Result<PartialConfig, ConfigError> {
        let rc_path = self.fs.home_dir()?.join(RC_FILE_NAME);

        // If file doesn't exist, leave every setting to the next provider
        let Some(content) = self.fs.read_to_string(&rc_path)? else {
            return Ok(PartialConfig::default());
        };

        // Parse TOML - any parse error should stop immediately
        let parsed: RcFile = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse {RC_FILE_NAME}: {e}")))?;

        Ok(PartialConfig {
            remote: parsed.remote,
            scheme: parsed.scheme,
            open_browser: parsed.open_browser,
        })
    }
}
