//! Environment Variable Configuration Provider
//!
//! Keys are camelCase (`vendorDir`); the variable name is the prefix followed
//! by the key in upper snake case (`MODULE_BUNDLES_VENDOR_DIR`).

use std::collections::HashMap;

use super::provider::ConfigProvider;
use super::{ConfigError, ConfigResult};

/// Prefix of all environment variables read by the generator.
pub const ENV_PREFIX: &str = "MODULE_BUNDLES_";

/// Read-only environment variable configuration provider.
#[derive(Debug, Clone)]
pub struct EnvConfigProvider {
    prefix: String,
    /// Fixed variable set; `None` reads the process environment.
    vars: Option<HashMap<String, String>>,
}

impl EnvConfigProvider {
    /// Provider for the process environment with the default prefix
    pub fn new() -> Self {
        Self::prefixed(ENV_PREFIX)
    }

    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            vars: None,
        }
    }

    /// Provider over a fixed set of variables instead of the process environment
    pub fn from_vars<K, V>(prefix: impl Into<String>, vars: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            prefix: prefix.into(),
            vars: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Get the full environment variable name
    pub fn env_key(&self, key: &str) -> String {
        let mut name = self.prefix.clone();
        for (i, c) in key.chars().enumerate() {
            if c.is_ascii_uppercase() && i > 0 {
                name.push('_');
            }
            match c {
                '.' | '-' => name.push('_'),
                c => name.push(c.to_ascii_uppercase()),
            }
        }
        name
    }
}

impl Default for EnvConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigProvider for EnvConfigProvider {
    fn name(&self) -> &str {
        "env"
    }

    fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        let env_key = self.env_key(key);
        if let Some(vars) = &self.vars {
            return Ok(vars.get(&env_key).cloned());
        }
        match std::env::var(&env_key) {
            Ok(value) => Ok(Some(value)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(ConfigError::Env(e)),
        }
    }
}
