//! In-memory package repository.
//!
//! Useful for tests and for embedding code that already has the package list.

use super::package::{DEFAULT_MODULE_TYPE, Package};
use super::{PackageError, PackageRepository};

#[derive(Debug, Clone)]
pub struct InMemoryPackageRepository {
    packages: Vec<Package>,
    module_type: String,
}

impl InMemoryPackageRepository {
    pub fn new() -> Self {
        Self {
            packages: Vec::new(),
            module_type: DEFAULT_MODULE_TYPE.to_string(),
        }
    }

    pub fn from_packages(packages: impl IntoIterator<Item = Package>) -> Self {
        Self {
            packages: packages.into_iter().collect(),
            ..Self::new()
        }
    }

    pub fn with_package(mut self, package: Package) -> Self {
        self.packages.push(package);
        self
    }

    pub fn with_module_type(mut self, module_type: impl Into<String>) -> Self {
        self.module_type = module_type.into();
        self
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for InMemoryPackageRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageRepository for InMemoryPackageRepository {
    fn find_all(&self) -> Result<Vec<Package>, PackageError> {
        Ok(self.packages.clone())
    }

    fn module_type(&self) -> &str {
        &self.module_type
    }
}
