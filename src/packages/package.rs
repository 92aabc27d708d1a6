use serde::Deserialize;

use crate::bundles::ExtraValue;

/// Package type of phpList modules.
pub const DEFAULT_MODULE_TYPE: &str = "phplist-module";

/// Composer's type for packages that do not declare one.
pub const LIBRARY_TYPE: &str = "library";

/// Name Composer gives a root package without a `name`.
pub const ROOT_PACKAGE_NAME: &str = "__root__";

/// An installed Composer package, reduced to what bundle discovery needs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Package {
    #[serde(default = "root_package_name")]
    name: String,
    #[serde(rename = "type", default = "library_type")]
    package_type: String,
    #[serde(default)]
    extra: ExtraValue,
}

fn root_package_name() -> String {
    ROOT_PACKAGE_NAME.to_string()
}

fn library_type() -> String {
    LIBRARY_TYPE.to_string()
}

impl Package {
    /// Creates a module package (type `phplist-module`).
    pub fn new(name: impl Into<String>, extra: impl Into<ExtraValue>) -> Self {
        Self {
            name: name.into(),
            package_type: DEFAULT_MODULE_TYPE.to_string(),
            extra: extra.into(),
        }
    }

    pub fn with_type(mut self, package_type: impl Into<String>) -> Self {
        self.package_type = package_type.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn package_type(&self) -> &str {
        &self.package_type
    }

    pub fn extra(&self) -> &ExtraValue {
        &self.extra
    }

    pub fn is_of_type(&self, package_type: &str) -> bool {
        self.package_type == package_type
    }
}
