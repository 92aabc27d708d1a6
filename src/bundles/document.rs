//! Rendering of the generated bundle configuration file.
//!
//! The output is a YAML mapping from module package name to a list of bundle
//! class names. It is written by hand rather than through a YAML serializer
//! because consumers diff it byte for byte.

use super::set::BundleSet;

pub const YAML_COMMENT: &str = "# This file is autogenerated. Please do not edit.";

/// Flow-style empty mapping emitted when no module declares a bundle.
pub const EMPTY_MAPPING: &str = "{  }";

const LF: char = '\n';
const LIST_ITEM_INDENT: &str = "    - ";

pub fn render_bundle_configuration(bundles: &BundleSet) -> String {
    let mut yaml = String::from(YAML_COMMENT);
    yaml.push(LF);

    if bundles.is_empty() {
        yaml.push_str(EMPTY_MAPPING);
        return yaml;
    }

    for (module, classes) in bundles.iter() {
        yaml.push_str(module);
        yaml.push(':');
        yaml.push(LF);
        for class in classes {
            yaml.push_str(LIST_ITEM_INDENT);
            yaml.push_str(class);
            yaml.push(LF);
        }
    }

    yaml
}
