use std::env::VarError;

use crate::configs::{ConfigError, PartialConfig, parse_bool, provider::ConfigProvider};

pub const REMOTE_VAR: &str = "BUGFLOW_REMOTE";
pub const SCHEME_VAR: &str = "BUGFLOW_SCHEME";
pub const OPEN_BROWSER_VAR: &str = "BUGFLOW_OPEN_BROWSER";

type Lookup = Box<dyn Fn(&str) -> Result<String, VarError>>;

/// Provider for environment variable configuration
///
/// Reads `BUGFLOW_REMOTE`, `BUGFLOW_SCHEME` and `BUGFLOW_OPEN_BROWSER`.
pub struct EnvProvider {
    lookup: Lookup,
}

impl EnvProvider {
    pub fn new() -> Self {
        Self::with_lookup(|key| std::env::var(key))
    }

    pub fn with_lookup(lookup: impl Fn(&str) -> Result<String, VarError> + 'static) -> Self {
        Self {
            lookup: Box::new(lookup),
        }
    }

    fn var(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match (self.lookup)(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::Env(format!("{key}: {e}"))),
        }
    }
}

impl ConfigProvider for EnvProvider {
    fn load(&self) -> Result<PartialConfig, ConfigError> {
        let open_browser = match self.var(OPEN_BROWSER_VAR)? {
            Some(value) => Some(parse_bool(&value).ok_or_else(|| {
                ConfigError::Env(format!("{OPEN_BROWSER_VAR}: expected true or false, got {value}"))
            })?),
            None => None,
        };

        Ok(PartialConfig {
            remote: self.var(REMOTE_VAR)?,
            scheme: self.var(SCHEME_VAR)?,
            open_browser,
        })
    }
}
