//! # module-bundles
//!
//! Finds the Symfony bundles that installed phpList modules register in their
//! `composer.json` and generates the bundle configuration file from them.
//!
//! ## Quick Start
//!
//! ```rust
//! use module_bundles::{ExtraValue, InMemoryPackageRepository, ModuleBundleFinder, Package};
//!
//! # fn main() -> Result<(), module_bundles::Error> {
//! let extra: ExtraValue = serde_json::from_str(
//!     r#"{"phplist/phplist4-core": {"bundles": ["Foo\\Bundle"]}}"#,
//! )?;
//! let repository = InMemoryPackageRepository::new()
//!     .with_package(Package::new("pkg/a", extra))
//!     .with_package(Package::new("pkg/b", ExtraValue::empty_array()));
//!
//! let finder = ModuleBundleFinder::new(repository);
//! assert_eq!(
//!     finder.create_bundle_configuration_yaml()?,
//!     "# This file is autogenerated. Please do not edit.\npkg/a:\n    - Foo\\Bundle\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Composer Projects
//!
//! ```rust,no_run
//! use module_bundles::{GeneratorConfig, InstalledPackageRepository, ModuleBundleFinder};
//!
//! # fn main() -> Result<(), module_bundles::Error> {
//! let config = GeneratorConfig::load(None)?;
//! let finder = ModuleBundleFinder::new(InstalledPackageRepository::from_config(&config));
//! finder.write_bundle_configuration(config.resolved_output_path())?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod bundles;
pub mod config;
pub mod observability;
pub mod packages;
pub mod prelude;

use std::path::PathBuf;

pub use bundles::{
    ArrayKey, BundleError, BundleSet, ExtraValue, ModuleBundleFinder, declared_bundle_classes,
    render_bundle_configuration,
};
pub use config::{ConfigBuilder, ConfigError, GeneratorConfig};
pub use packages::{
    InMemoryPackageRepository, InstalledPackageRepository, Package, PackageError,
    PackageRepository,
};

/// Error type for module-bundles operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A module declares its bundles in a malformed way.
    #[error("{0} (module: {module})", module = .0.module())]
    Bundle(#[from] BundleError),

    /// Installed packages could not be read.
    #[error("Package repository error: {0}")]
    Package(#[from] PackageError),

    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// JSON serialization or deserialization failed.
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The generated file could not be written.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Log output could not be set up.
    #[error("Observability error: {0}")]
    Observability(String),
}

/// Error category for unified error handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Broken bundle declarations in a module manifest
    Validation,
    /// Configuration, manifest parsing, or setup errors
    Configuration,
    /// IO and other environment failures
    Internal,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Bundle(_) => ErrorCategory::Validation,

            Error::Config(_)
            | Error::Json(_)
            | Error::Package(PackageError::InvalidManifest { .. })
            | Error::Package(PackageError::ManifestNotFound { .. }) => {
                ErrorCategory::Configuration
            }

            Error::Package(PackageError::Io(_))
            | Error::Write { .. }
            | Error::Observability(_) => ErrorCategory::Internal,
        }
    }

    pub fn is_validation_error(&self) -> bool {
        self.category() == ErrorCategory::Validation
    }

    pub fn is_configuration_error(&self) -> bool {
        self.category() == ErrorCategory::Configuration
    }

    /// Stable code of a bundle validation error.
    pub fn code(&self) -> Option<u64> {
        match self {
            Error::Bundle(e) => Some(e.code()),
            _ => None,
        }
    }
}

/// Result type alias for module-bundles operations.
pub type Result<T> = std::result::Result<T, Error>;
