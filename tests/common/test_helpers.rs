//! Test helper functions and utilities
//!
//! Sandboxed tplrepo home directories backed by `tempfile`.

use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tplrepo::infrastructure::filesystem::registry_store::YamlRegistryStore;

/// A throwaway tplrepo home directory
pub struct TestHome {
    dir: TempDir,
}

impl TestHome {
    /// Create an empty home (no repository file yet)
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Create a home with the given repository file content
    pub fn with_repository_file(content: &str) -> Self {
        let home = Self::new();
        home.write_repository_file(content);
        home
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn repository_file(&self) -> PathBuf {
        YamlRegistryStore::repository_file_path(self.dir.path())
    }

    pub fn write_repository_file(&self, content: &str) {
        self.write_repository_bytes(content.as_bytes());
    }

    pub fn write_repository_bytes(&self, content: &[u8]) {
        let path = self.repository_file();
        std::fs::create_dir_all(path.parent().unwrap()).expect("Failed to create repository dir");
        std::fs::write(&path, content).expect("Failed to write repository file");
    }

    pub fn read_repository_file(&self) -> String {
        std::fs::read_to_string(self.repository_file()).expect("Failed to read repository file")
    }

    pub fn store(&self) -> YamlRegistryStore {
        YamlRegistryStore::in_home(self.dir.path())
    }

    /// Names of all files next to the repository file
    pub fn repository_dir_listing(&self) -> Vec<String> {
        let dir = self.repository_file().parent().unwrap().to_path_buf();
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|entry| entry.ok())
                    .map(|entry| entry.file_name().to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }
}
