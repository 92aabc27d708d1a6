//! Prelude module for convenient imports.
//!
//! ```rust
//! use module_bundles::prelude::*;
//! ```

pub use crate::Error;
pub use crate::Result;

// Discovery
pub use crate::bundles::{BundleSet, ExtraValue, ModuleBundleFinder};

// Packages
pub use crate::packages::{
    InMemoryPackageRepository, InstalledPackageRepository, Package, PackageRepository,
};

// Configuration
pub use crate::config::{ConfigBuilder, GeneratorConfig};
