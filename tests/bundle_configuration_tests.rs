//! Bundle Configuration Tests
//!
//! End-to-end generation against Composer project layouts on disk.
//!
//! Run: cargo nextest run --test bundle_configuration_tests

use std::collections::BTreeMap;
use std::path::Path;

use module_bundles::{
    Error, GeneratorConfig, InstalledPackageRepository, ModuleBundleFinder, PackageRepository,
};
use tempfile::TempDir;

const HEADER: &str = "# This file is autogenerated. Please do not edit.";

fn write_json(path: &Path, value: serde_json::Value) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
}

fn write_installed(project: &Path, packages: serde_json::Value) {
    write_json(
        &project.join("vendor/composer/installed.json"),
        serde_json::json!({ "packages": packages, "dev": true }),
    );
}

fn write_root(project: &Path, root: serde_json::Value) {
    write_json(&project.join("composer.json"), root);
}

fn finder_for(project: &Path) -> ModuleBundleFinder<InstalledPackageRepository> {
    ModuleBundleFinder::new(InstalledPackageRepository::new(project))
}

fn base_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    write_root(
        dir.path(),
        serde_json::json!({"name": "phplist/base-distribution", "type": "project"}),
    );
    dir
}

// =============================================================================
// Discovery
// =============================================================================

mod discovery_tests {
    use super::*;

    #[test]
    fn test_installed_modules_with_bundles() {
        let project = base_project();
        write_installed(
            project.path(),
            serde_json::json!([
                {
                    "name": "phplist/core",
                    "type": "phplist-module",
                    "extra": {"phplist/phplist4-core": {"bundles": [
                        "Symfony\\Bundle\\FrameworkBundle\\FrameworkBundle",
                        "PhpList\\Core\\EmptyStartPageBundle\\EmptyStartPageBundle"
                    ]}}
                },
                {
                    "name": "symfony/framework-bundle",
                    "type": "symfony-bundle",
                    "extra": {"phplist/phplist4-core": "ignored, not a module"}
                },
                {
                    "name": "phplist/web-frontend",
                    "type": "phplist-module",
                    "extra": {"branch-alias": {"dev-master": "4.0.x-dev"}}
                },
                {
                    "name": "phplist/rest-api",
                    "type": "phplist-module",
                    "extra": {"phplist/phplist4-core": {"bundles": [
                        "FOS\\RestBundle\\FOSRestBundle",
                        "PhpList\\RestBundle\\PhpListRestBundle"
                    ]}}
                }
            ]),
        );

        let bundles = finder_for(project.path()).find_bundle_classes().unwrap();

        let names: Vec<&str> = bundles.module_names().collect();
        assert_eq!(names, vec!["phplist/core", "phplist/rest-api"]);
        assert_eq!(bundles.class_count(), 4);
        assert_eq!(
            bundles.get("phplist/rest-api").unwrap(),
            [
                "FOS\\RestBundle\\FOSRestBundle".to_string(),
                "PhpList\\RestBundle\\PhpListRestBundle".to_string()
            ]
            .as_slice()
        );
    }

    #[test]
    fn test_no_module_declares_bundles() {
        let project = base_project();
        write_installed(
            project.path(),
            serde_json::json!([
                {"name": "phplist/web-frontend", "type": "phplist-module"},
                {"name": "psr/log", "type": "library"}
            ]),
        );

        let bundles = finder_for(project.path()).find_bundle_classes().unwrap();
        assert!(bundles.is_empty());
    }

    #[test]
    fn test_root_package_bundles() {
        let project = TempDir::new().unwrap();
        write_root(
            project.path(),
            serde_json::json!({
                "name": "phplist/my-module",
                "type": "phplist-module",
                "extra": {"phplist/phplist4-core": {"bundles": ["My\\ModuleBundle"]}}
            }),
        );
        write_installed(project.path(), serde_json::json!([]));

        let bundles = finder_for(project.path()).find_bundle_classes().unwrap();
        assert!(bundles.contains("phplist/my-module"));

        let without_root = ModuleBundleFinder::new(
            InstalledPackageRepository::new(project.path()).include_root_package(false),
        )
        .find_bundle_classes()
        .unwrap();
        assert!(without_root.is_empty());
    }

    #[test]
    fn test_repository_is_queried_for_modules_only() {
        let project = base_project();
        write_installed(
            project.path(),
            serde_json::json!([
                {"name": "a/module", "type": "phplist-module"},
                {"name": "b/library"}
            ]),
        );

        let repo = InstalledPackageRepository::new(project.path());
        assert_eq!(repo.find_all().unwrap().len(), 3);
        assert_eq!(repo.find_modules().unwrap().len(), 1);
    }
}

// =============================================================================
// Validation
// =============================================================================

mod validation_tests {
    use super::*;

    fn generate_with_extra(extra: serde_json::Value) -> Result<String, Error> {
        let project = base_project();
        write_installed(
            project.path(),
            serde_json::json!([
                {"name": "phplist/good", "type": "phplist-module",
                 "extra": {"phplist/phplist4-core": {"bundles": ["Good\\Bundle"]}}},
                {"name": "phplist/broken", "type": "phplist-module", "extra": extra}
            ]),
        );
        finder_for(project.path()).create_bundle_configuration_yaml()
    }

    #[test]
    fn test_section_not_array() {
        let err = generate_with_extra(serde_json::json!({"phplist/phplist4-core": "bundles"}))
            .unwrap_err();
        assert!(err.is_validation_error());
        assert_eq!(err.code(), Some(1505411436144));
        assert_eq!(
            err.to_string(),
            "The extras.phplist/phplist4-core\" section in the composer.json must be an array. (module: phplist/broken)"
        );
    }

    #[test]
    fn test_bundles_not_array() {
        let err = generate_with_extra(
            serde_json::json!({"phplist/phplist4-core": {"bundles": "Broken\\Bundle"}}),
        )
        .unwrap_err();
        assert_eq!(err.code(), Some(1505411665146));
    }

    #[test]
    fn test_bundle_not_string_names_key() {
        let err = generate_with_extra(
            serde_json::json!({"phplist/phplist4-core": {"bundles": ["Ok\\Bundle", false]}}),
        )
        .unwrap_err();
        assert_eq!(err.code(), Some(1505412184038));
        assert_eq!(
            err.to_string(),
            "The extras.phplist/phplist4-core.bundles. 1\" section in the composer.json must be a string. (module: phplist/broken)"
        );
    }

    #[test]
    fn test_error_does_not_overwrite_existing_file() {
        let project = base_project();
        write_installed(
            project.path(),
            serde_json::json!([
                {"name": "phplist/broken", "type": "phplist-module",
                 "extra": {"phplist/phplist4-core": 17}}
            ]),
        );
        let output = project.path().join("Configuration/bundles.yml");
        std::fs::create_dir_all(output.parent().unwrap()).unwrap();
        std::fs::write(&output, "old: []\n").unwrap();

        let result = finder_for(project.path()).write_bundle_configuration(&output);
        assert!(matches!(result, Err(Error::Bundle(_))));
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "old: []\n");
    }

    #[test]
    fn test_broken_installed_json() {
        let project = base_project();
        let path = project.path().join("vendor/composer/installed.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{\"packages\": [").unwrap();

        let err = finder_for(project.path()).find_bundle_classes().unwrap_err();
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("installed.json"));
    }
}

// =============================================================================
// Generated document
// =============================================================================

mod document_tests {
    use super::*;

    #[test]
    fn test_empty_document_is_exact() {
        let project = base_project();
        write_installed(project.path(), serde_json::json!([]));

        let yaml = finder_for(project.path())
            .create_bundle_configuration_yaml()
            .unwrap();
        assert_eq!(yaml, format!("{}\n{{  }}", HEADER));
    }

    #[test]
    fn test_document_layout() {
        let project = base_project();
        write_installed(
            project.path(),
            serde_json::json!([
                {"name": "pkg/a", "type": "phplist-module",
                 "extra": {"phplist/phplist4-core": {"bundles": ["Foo\\Bundle"]}}},
                {"name": "pkg/b", "type": "phplist-module", "extra": {}}
            ]),
        );

        let yaml = finder_for(project.path())
            .create_bundle_configuration_yaml()
            .unwrap();
        assert_eq!(
            yaml,
            "# This file is autogenerated. Please do not edit.\npkg/a:\n    - Foo\\Bundle\n"
        );
    }

    #[test]
    fn test_document_parses_as_yaml_mapping() {
        let project = base_project();
        write_installed(
            project.path(),
            serde_json::json!([
                {"name": "phplist/core", "type": "phplist-module",
                 "extra": {"phplist/phplist4-core": {"bundles": [
                     "Symfony\\Bundle\\FrameworkBundle\\FrameworkBundle",
                     "Doctrine\\Bundle\\DoctrineBundle\\DoctrineBundle"
                 ]}}},
                {"name": "phplist/rest-api", "type": "phplist-module",
                 "extra": {"phplist/phplist4-core": {"bundles": ["PhpList\\RestBundle\\PhpListRestBundle"]}}}
            ]),
        );

        let yaml = finder_for(project.path())
            .create_bundle_configuration_yaml()
            .unwrap();
        let parsed: BTreeMap<String, Vec<String>> = serde_yaml_bw::from_str(&yaml).unwrap();

        assert_eq!(parsed.len(), 2);
        assert_eq!(
            parsed["phplist/core"],
            vec![
                "Symfony\\Bundle\\FrameworkBundle\\FrameworkBundle".to_string(),
                "Doctrine\\Bundle\\DoctrineBundle\\DoctrineBundle".to_string()
            ]
        );
        assert_eq!(
            parsed["phplist/rest-api"],
            vec!["PhpList\\RestBundle\\PhpListRestBundle".to_string()]
        );
    }

    #[test]
    fn test_empty_document_parses_as_empty_mapping() {
        let project = base_project();
        write_installed(project.path(), serde_json::json!([]));

        let yaml = finder_for(project.path())
            .create_bundle_configuration_yaml()
            .unwrap();
        let parsed: BTreeMap<String, Vec<String>> = serde_yaml_bw::from_str(&yaml).unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_generation_is_repeatable() {
        let project = base_project();
        write_installed(
            project.path(),
            serde_json::json!([
                {"name": "pkg/a", "type": "phplist-module",
                 "extra": {"phplist/phplist4-core": {"bundles": ["A\\One", "A\\Two"]}}},
                {"name": "pkg/b", "type": "phplist-module",
                 "extra": {"phplist/phplist4-core": {"bundles": ["B\\One"]}}}
            ]),
        );

        let finder = finder_for(project.path());
        let first = finder.create_bundle_configuration_yaml().unwrap();
        let second = finder.create_bundle_configuration_yaml().unwrap();
        assert_eq!(first, second);
    }
}

// =============================================================================
// Configuration
// =============================================================================

mod config_tests {
    use super::*;
    use module_bundles::ConfigBuilder;

    #[test]
    fn test_generate_from_config_file() {
        let project = base_project();
        let vendor = project.path().join("lib/composer/installed.json");
        write_json(
            &vendor,
            serde_json::json!([
                {"name": "acme/plugin", "type": "acme-plugin",
                 "extra": {"phplist/phplist4-core": {"bundles": ["Acme\\PluginBundle"]}}}
            ]),
        );

        let config_path = project.path().join("module-bundles.json");
        write_json(
            &config_path,
            serde_json::json!({
                "projectDir": project.path(),
                "vendorDir": "lib",
                "outputPath": "var/bundles.yml",
                "moduleType": "acme-plugin"
            }),
        );

        let config: GeneratorConfig = ConfigBuilder::new().file(&config_path).build().unwrap();
        let finder = ModuleBundleFinder::new(InstalledPackageRepository::from_config(&config));
        let written = finder
            .write_bundle_configuration(config.resolved_output_path())
            .unwrap();

        assert_eq!(written, project.path().join("var/bundles.yml"));
        assert_eq!(
            std::fs::read_to_string(&written).unwrap(),
            format!("{}\nacme/plugin:\n    - Acme\\PluginBundle\n", HEADER)
        );
    }
}
