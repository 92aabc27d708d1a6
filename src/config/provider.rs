//! Configuration Provider Trait

use super::{ConfigError, ConfigResult};

/// Core configuration provider trait
pub trait ConfigProvider {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Get a raw configuration value
    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>>;
}

/// Extension methods for typed configuration access
pub trait ConfigProviderExt: ConfigProvider {
    /// Get a boolean, accepting `1/0`, `true/false`, `yes/no` and `on/off`
    fn get_flag(&self, key: &str) -> ConfigResult<Option<bool>> {
        match self.get_raw(key)? {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(Some(true)),
                "0" | "false" | "no" | "off" => Ok(Some(false)),
                other => Err(ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected a boolean, got '{}'", other),
                }),
            },
            None => Ok(None),
        }
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProviderExt for P {}
