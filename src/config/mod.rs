//! Generator configuration.
//!
//! Sources, highest priority first:
//! 1. `MODULE_BUNDLES_*` environment variables
//! 2. JSON configuration file (`module-bundles.json` unless given)
//! 3. Built-in defaults
//!
//! Command line flags are applied on top by the `generate-bundles` binary.
//!
//! ```rust,no_run
//! use module_bundles::config::ConfigBuilder;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigBuilder::new()
//!     .env()
//!     .file("module-bundles.json")
//!     .build()?;
//! println!("{}", config.resolved_output_path().display());
//! # Ok(())
//! # }
//! ```

mod composite;
mod env;
mod file;
mod generator;
mod provider;

use std::path::{Path, PathBuf};

pub use composite::CompositeConfigProvider;
pub use env::{ENV_PREFIX, EnvConfigProvider};
pub use file::FileConfigProvider;
pub use generator::{
    DEFAULT_OUTPUT_PATH, GeneratorConfig, INCLUDE_ROOT_PACKAGE_KEY, MODULE_TYPE_KEY,
    OUTPUT_PATH_KEY, PROJECT_DIR_KEY, VENDOR_DIR_KEY,
};
pub use provider::{ConfigProvider, ConfigProviderExt};

use thiserror::Error;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "module-bundles.json";

/// Errors that can occur in configuration operations
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    /// Configuration file is not a JSON object
    #[error("Invalid configuration file {path}: {reason}")]
    InvalidFile { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment error: {0}")]
    Env(#[from] std::env::VarError),
}

/// Result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Configuration builder for fluent API. Providers added first win.
#[derive(Default)]
pub struct ConfigBuilder {
    providers: Vec<Box<dyn ConfigProvider>>,
    errors: Vec<ConfigError>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the process environment with the `MODULE_BUNDLES_` prefix
    pub fn env(mut self) -> Self {
        self.providers.push(Box::new(EnvConfigProvider::new()));
        self
    }

    pub fn env_with_prefix(mut self, prefix: &str) -> Self {
        self.providers
            .push(Box::new(EnvConfigProvider::prefixed(prefix)));
        self
    }

    /// Add a JSON file. Read errors surface from `build`.
    pub fn file(mut self, path: impl AsRef<Path>) -> Self {
        match FileConfigProvider::open(path.as_ref()) {
            Ok(provider) => self.providers.push(Box::new(provider)),
            Err(e) => self.errors.push(e),
        }
        self
    }

    pub fn provider(mut self, provider: Box<dyn ConfigProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn build(mut self) -> ConfigResult<GeneratorConfig> {
        if !self.errors.is_empty() {
            return Err(self.errors.remove(0));
        }
        let mut composite = CompositeConfigProvider::new();
        for provider in self.providers {
            composite.add_provider(provider);
        }
        GeneratorConfig::from_provider(&composite)
    }
}

impl GeneratorConfig {
    /// Environment over `config_file` (or `module-bundles.json`) over defaults.
    pub fn load(config_file: Option<&Path>) -> ConfigResult<Self> {
        ConfigBuilder::new()
            .env()
            .file(config_file.unwrap_or(Path::new(DEFAULT_CONFIG_FILE)))
            .build()
    }
}
