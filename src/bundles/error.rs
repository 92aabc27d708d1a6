use super::extra::ArrayKey;

/// A malformed bundle declaration in a module's `composer.json`.
///
/// The messages and codes are stable; build tooling matches on them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BundleError {
    #[error(
        "The extras.phplist/phplist4-core\" section in the composer.json must be an array."
    )]
    SectionNotArray { module: String },

    #[error(
        "The extras.phplist/phplist4-core.bundles section in the composer.json must be an array."
    )]
    BundlesNotArray { module: String },

    #[error(
        "The extras.phplist/phplist4-core.bundles. {key}\" section in the composer.json must be a string."
    )]
    BundleNotString { module: String, key: ArrayKey },
}

impl BundleError {
    pub const SECTION_NOT_ARRAY_CODE: u64 = 1505411436144;
    pub const BUNDLES_NOT_ARRAY_CODE: u64 = 1505411665146;
    pub const BUNDLE_NOT_STRING_CODE: u64 = 1505412184038;

    pub fn code(&self) -> u64 {
        match self {
            BundleError::SectionNotArray { .. } => Self::SECTION_NOT_ARRAY_CODE,
            BundleError::BundlesNotArray { .. } => Self::BUNDLES_NOT_ARRAY_CODE,
            BundleError::BundleNotString { .. } => Self::BUNDLE_NOT_STRING_CODE,
        }
    }

    /// Name of the package whose manifest failed validation.
    pub fn module(&self) -> &str {
        match self {
            BundleError::SectionNotArray { module }
            | BundleError::BundlesNotArray { module }
            | BundleError::BundleNotString { module, .. } => module,
        }
    }
}
