use std::path::{Path, PathBuf};

use super::document::render_bundle_configuration;
use super::error::BundleError;
use super::extra::ExtraValue;
use super::set::BundleSet;
use crate::packages::{Package, PackageRepository};

/// Key in `extra` under which modules declare what they contribute.
pub const OWNER_KEY: &str = "phplist/phplist4-core";

/// Key below [`OWNER_KEY`] listing the module's bundle classes.
pub const BUNDLES_KEY: &str = "bundles";

/// Finds the bundle classes registered by installed modules.
///
/// The repository is queried once per call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ModuleBundleFinder<R> {
    repository: R,
}

impl<R: PackageRepository> ModuleBundleFinder<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Bundle classes of all installed modules, keyed by module package name.
    ///
    /// Modules without declarations are left out. The first malformed
    /// declaration aborts the whole search.
    pub fn find_bundle_classes(&self) -> crate::Result<BundleSet> {
        let _span = tracing::info_span!("bundles.find").entered();

        let modules = self.repository.find_modules()?;
        let mut bundle_set = BundleSet::new();

        for module in &modules {
            let classes = declared_bundle_classes(module)?;
            if classes.is_empty() {
                tracing::debug!(module = module.name(), "No bundles declared");
                continue;
            }

            tracing::debug!(module = module.name(), count = classes.len(), "Found bundles");
            bundle_set.insert(module.name(), classes);
        }

        Ok(bundle_set)
    }

    /// Contents of the generated bundle configuration file.
    pub fn create_bundle_configuration_yaml(&self) -> crate::Result<String> {
        let bundle_set = self.find_bundle_classes()?;
        Ok(render_bundle_configuration(&bundle_set))
    }

    /// Renders the bundle configuration and writes it to `path`, creating
    /// missing parent directories. An existing file is overwritten.
    pub fn write_bundle_configuration(&self, path: impl AsRef<Path>) -> crate::Result<PathBuf> {
        let path = path.as_ref();
        let yaml = self.create_bundle_configuration_yaml()?;

        let write = || -> std::io::Result<()> {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &yaml)
        };
        write().map_err(|source| crate::Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), bytes = yaml.len(), "Wrote bundle configuration");
        Ok(path.to_path_buf())
    }
}

/// Validates the bundle declaration in `package`'s `extra` block and returns
/// the declared class names in declaration order.
///
/// A missing or `null` section means "nothing declared" and yields an empty
/// list, as does an empty `bundles` array.
pub fn declared_bundle_classes(package: &Package) -> Result<Vec<String>, BundleError> {
    let Some(section) = package.extra().get_set(OWNER_KEY) else {
        return Ok(Vec::new());
    };
    if !section.is_array() {
        tracing::debug!(
            module = package.name(),
            kind = section.kind(),
            "Bundle section is not an array"
        );
        return Err(BundleError::SectionNotArray {
            module: package.name().to_string(),
        });
    }

    let Some(bundles) = section.get_set(BUNDLES_KEY) else {
        return Ok(Vec::new());
    };
    let ExtraValue::Array(entries) = bundles else {
        return Err(BundleError::BundlesNotArray {
            module: package.name().to_string(),
        });
    };

    entries
        .iter()
        .map(|(key, value)| match value {
            ExtraValue::String(class) => Ok(class.clone()),
            _ => Err(BundleError::BundleNotString {
                module: package.name().to_string(),
                key: key.clone(),
            }),
        })
        .collect()
}
