use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::package::{DEFAULT_MODULE_TYPE, Package};
use super::{PackageError, PackageRepository};
use crate::config::GeneratorConfig;

const ROOT_MANIFEST_FILE: &str = "composer.json";
pub(crate) const DEFAULT_VENDOR_DIR: &str = "vendor";
const COMPOSER_DIR: &str = "composer";
const INSTALLED_MANIFEST_FILE: &str = "installed.json";

/// `installed.json` is a bare list up to Composer 1 and an object with a
/// `packages` list from Composer 2 on.
#[derive(Deserialize)]
#[serde(untagged)]
enum InstalledManifest {
    Composer2 { packages: Vec<Package> },
    Composer1(Vec<Package>),
}

impl InstalledManifest {
    fn into_packages(self) -> Vec<Package> {
        match self {
            InstalledManifest::Composer2 { packages } => packages,
            InstalledManifest::Composer1(packages) => packages,
        }
    }
}

/// Packages of a Composer project on disk: the root package from
/// `composer.json` followed by everything in `<vendor>/composer/installed.json`.
#[derive(Debug, Clone)]
pub struct InstalledPackageRepository {
    project_dir: PathBuf,
    vendor_dir: PathBuf,
    module_type: String,
    include_root_package: bool,
}

impl InstalledPackageRepository {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
            vendor_dir: PathBuf::from(DEFAULT_VENDOR_DIR),
            module_type: DEFAULT_MODULE_TYPE.to_string(),
            include_root_package: true,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(&config.project_dir)
            .with_vendor_dir(&config.vendor_dir)
            .with_module_type(&config.module_type)
            .include_root_package(config.include_root_package)
    }

    /// Vendor directory, relative to the project directory unless absolute.
    pub fn with_vendor_dir(mut self, vendor_dir: impl Into<PathBuf>) -> Self {
        self.vendor_dir = vendor_dir.into();
        self
    }

    pub fn with_module_type(mut self, module_type: impl Into<String>) -> Self {
        self.module_type = module_type.into();
        self
    }

    pub fn include_root_package(mut self, include: bool) -> Self {
        self.include_root_package = include;
        self
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn root_manifest_path(&self) -> PathBuf {
        self.project_dir.join(ROOT_MANIFEST_FILE)
    }

    pub fn installed_manifest_path(&self) -> PathBuf {
        self.project_dir
            .join(&self.vendor_dir)
            .join(COMPOSER_DIR)
            .join(INSTALLED_MANIFEST_FILE)
    }

    fn load_root_package(&self) -> Result<Option<Package>, PackageError> {
        let path = self.root_manifest_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No root composer.json");
            return Ok(None);
        }
        read_manifest(&path).map(Some)
    }

    fn load_installed_packages(&self) -> Result<Option<Vec<Package>>, PackageError> {
        let path = self.installed_manifest_path();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No installed.json, nothing installed yet");
            return Ok(None);
        }
        let manifest: InstalledManifest = read_manifest(&path)?;
        Ok(Some(manifest.into_packages()))
    }
}

fn read_manifest<T: DeserializeOwned>(path: &Path) -> Result<T, PackageError> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| PackageError::InvalidManifest {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl PackageRepository for InstalledPackageRepository {
    fn find_all(&self) -> Result<Vec<Package>, PackageError> {
        let root = if self.include_root_package {
            self.load_root_package()?
        } else {
            None
        };
        let installed = self.load_installed_packages()?;

        if root.is_none() && installed.is_none() && !self.root_manifest_path().exists() {
            return Err(PackageError::ManifestNotFound {
                path: self.root_manifest_path(),
            });
        }

        let mut seen = HashSet::new();
        let packages: Vec<Package> = root
            .into_iter()
            .chain(installed.unwrap_or_default())
            .filter(|package| seen.insert(package.name().to_string()))
            .collect();

        tracing::debug!(
            project = %self.project_dir.display(),
            count = packages.len(),
            "Loaded Composer packages"
        );
        Ok(packages)
    }

    fn module_type(&self) -> &str {
        &self.module_type
    }
}
