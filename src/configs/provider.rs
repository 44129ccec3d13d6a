use crate::configs::{ConfigError, PartialConfig};

/// Trait for configuration providers
///
/// Each provider represents a source of configuration (environment variables,
/// config files, defaults, etc.) and reports the settings it defines.
///
/// Providers are consulted in priority order; for each setting the first
/// provider that defines it wins.
pub trait ConfigProvider {
    /// Load the settings defined by this configuration source
    ///
    /// # Returns
    ///
    /// - `Ok(partial)`: Settings found in this source (possibly none)
    /// - `Err(e)`: Configuration exists but failed to parse (stop immediately)
    fn load(&self) -> Result<PartialConfig, ConfigError>;
}
