//! Bundle discovery for Composer modules.
//!
//! Modules register Symfony bundles in the `extra` section of their
//! `composer.json`:
//!
//! ```json
//! {
//!     "name": "phplist/rest-api",
//!     "type": "phplist-module",
//!     "extra": {
//!         "phplist/phplist4-core": {
//!             "bundles": [
//!                 "PhpList\\RestBundle\\PhpListRestBundle"
//!             ]
//!         }
//!     }
//! }
//! ```
//!
//! [`ModuleBundleFinder`] collects these declarations from every installed
//! module and renders them into the generated bundle configuration file:
//!
//! ```text
//! # This file is autogenerated. Please do not edit.
//! phplist/rest-api:
//!     - PhpList\RestBundle\PhpListRestBundle
//! ```

mod document;
mod error;
mod extra;
mod finder;
mod set;

pub use document::{EMPTY_MAPPING, YAML_COMMENT, render_bundle_configuration};
pub use error::BundleError;
pub use extra::{ArrayKey, ExtraValue};
pub use finder::{BUNDLES_KEY, ModuleBundleFinder, OWNER_KEY, declared_bundle_classes};
pub use set::BundleSet;
