//! Access to installed Composer packages.
//!
//! Bundle discovery only ever talks to a [`PackageRepository`]. Two
//! implementations ship with the crate:
//! - [`InstalledPackageRepository`] reads a Composer project on disk
//!   (`composer.json` plus `vendor/composer/installed.json`)
//! - [`InMemoryPackageRepository`] holds a fixed package list

mod error;
mod installed;
mod memory;
mod package;

pub use error::PackageError;
pub use installed::InstalledPackageRepository;
pub use memory::InMemoryPackageRepository;
pub use package::{DEFAULT_MODULE_TYPE, LIBRARY_TYPE, Package, ROOT_PACKAGE_NAME};

pub(crate) use installed::DEFAULT_VENDOR_DIR;

/// Source of installed packages.
pub trait PackageRepository {
    /// All installed packages, in installation order.
    fn find_all(&self) -> Result<Vec<Package>, PackageError>;

    /// Package type that marks a package as a module.
    fn module_type(&self) -> &str {
        DEFAULT_MODULE_TYPE
    }

    /// Installed packages of the module type, in installation order.
    fn find_modules(&self) -> Result<Vec<Package>, PackageError> {
        let module_type = self.module_type();
        Ok(self
            .find_all()?
            .into_iter()
            .filter(|package| package.is_of_type(module_type))
            .collect())
    }
}

impl<R: PackageRepository + ?Sized> PackageRepository for &R {
    fn find_all(&self) -> Result<Vec<Package>, PackageError> {
        (**self).find_all()
    }

    fn module_type(&self) -> &str {
        (**self).module_type()
    }

    fn find_modules(&self) -> Result<Vec<Package>, PackageError> {
        (**self).find_modules()
    }
}

impl<R: PackageRepository + ?Sized> PackageRepository for Box<R> {
    fn find_all(&self) -> Result<Vec<Package>, PackageError> {
        (**self).find_all()
    }

    fn module_type(&self) -> &str {
        (**self).module_type()
    }

    fn find_modules(&self) -> Result<Vec<Package>, PackageError> {
        (**self).find_modules()
    }
}
