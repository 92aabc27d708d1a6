//! Settings of a bundle configuration run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigResult;
use super::provider::{ConfigProvider, ConfigProviderExt};
use crate::packages::{DEFAULT_MODULE_TYPE, DEFAULT_VENDOR_DIR};

pub const PROJECT_DIR_KEY: &str = "projectDir";
pub const VENDOR_DIR_KEY: &str = "vendorDir";
pub const OUTPUT_PATH_KEY: &str = "outputPath";
pub const MODULE_TYPE_KEY: &str = "moduleType";
pub const INCLUDE_ROOT_PACKAGE_KEY: &str = "includeRootPackage";

/// Where the generated file goes, relative to the project directory.
pub const DEFAULT_OUTPUT_PATH: &str = "Configuration/bundles.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Composer project root (the directory holding `composer.json`).
    pub project_dir: PathBuf,
    /// Relative to `project_dir` unless absolute.
    pub vendor_dir: PathBuf,
    /// Relative to `project_dir` unless absolute.
    pub output_path: PathBuf,
    pub module_type: String,
    /// Whether the root package can contribute bundles itself.
    pub include_root_package: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("."),
            vendor_dir: PathBuf::from(DEFAULT_VENDOR_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            module_type: DEFAULT_MODULE_TYPE.to_string(),
            include_root_package: true,
        }
    }
}

impl GeneratorConfig {
    /// Defaults overridden by whatever `provider` sets.
    pub fn from_provider(provider: &dyn ConfigProvider) -> ConfigResult<Self> {
        let mut config = Self::default();
        config.apply(provider)?;
        Ok(config)
    }

    pub fn apply(&mut self, provider: &dyn ConfigProvider) -> ConfigResult<()> {
        if let Some(dir) = provider.get_raw(PROJECT_DIR_KEY)? {
            self.project_dir = PathBuf::from(dir);
        }
        if let Some(dir) = provider.get_raw(VENDOR_DIR_KEY)? {
            self.vendor_dir = PathBuf::from(dir);
        }
        if let Some(path) = provider.get_raw(OUTPUT_PATH_KEY)? {
            self.output_path = PathBuf::from(path);
        }
        if let Some(module_type) = provider.get_raw(MODULE_TYPE_KEY)? {
            self.module_type = module_type;
        }
        if let Some(include) = provider.get_flag(INCLUDE_ROOT_PACKAGE_KEY)? {
            self.include_root_package = include;
        }
        Ok(())
    }

    pub fn resolved_output_path(&self) -> PathBuf {
        self.project_dir.join(&self.output_path)
    }

    pub fn resolved_vendor_dir(&self) -> PathBuf {
        self.project_dir.join(&self.vendor_dir)
    }
}
