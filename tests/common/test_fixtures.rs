//! Test fixtures for creating test data
//!
//! Registries and repository file contents shared by the integration tests.

use tplrepo::domain::entities::{Registry, RepositoryEntry};

/// Test fixture for building registries
pub struct RegistryFixture;

impl RegistryFixture {
    /// incubator (default) and experimental
    pub fn builtin() -> Registry {
        Registry::builtin()
    }

    /// incubator (default), experimental and localhub
    pub fn with_localhub() -> Registry {
        let mut registry = Registry::builtin();
        registry
            .insert(
                RepositoryEntry::parse("localhub", "http://localhost:8080/localhub-index.yaml")
                    .unwrap(),
            )
            .unwrap();
        registry
    }
}

/// Test fixture for repository file contents
pub struct RepositoryFileFixture;

impl RepositoryFileFixture {
    /// The file written on first save of the built-in registry
    pub fn default_config() -> &'static str {
        r#"apiVersion: v1
generated: 2024-05-01T10:00:00Z
repositories:
  - name: incubator
    url: https://github.com/appsody/stacks/releases/latest/download/incubator-index.yaml
    default: true
  - name: experimental
    url: https://github.com/appsody/stacks/releases/latest/download/experimental-index.yaml
"#
    }

    /// Three repositories, incubator is the default
    pub fn multiple_repository_config() -> &'static str {
        r#"apiVersion: v1
generated: 2024-05-01T10:00:00Z
repositories:
  - name: incubator
    url: https://github.com/appsody/stacks/releases/latest/download/incubator-index.yaml
    default: true
  - name: experimental
    url: https://github.com/appsody/stacks/releases/latest/download/experimental-index.yaml
  - name: localhub
    url: http://localhost:8080/localhub-index.yaml
"#
    }

    /// Not valid YAML at all
    pub fn bad_format_config() -> &'static str {
        "apiVersion: v1\nrepositories:\n  - name: incubator\n   url: [unclosed\n"
    }

    /// Valid YAML, but an entry is missing its url
    pub fn missing_url_config() -> &'static str {
        r#"apiVersion: v1
repositories:
  - name: incubator
    default: true
"#
    }
}
