use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs as async_fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::common::error::RegistryError;
use crate::common::result::{IoResultExt, RegistryResult};
use crate::domain::entities::{Registry, RepositoryEntry};

/// File name of the registry inside `<home>/repository/`
pub const REPOSITORY_FILE_NAME: &str = "repository.yaml";

/// Schema version written to and expected in the repository file
pub const API_VERSION: &str = "v1";

/// Persistence port for the repository registry
///
/// `load` never mutates durable state; `save` is the only operation that does.
#[async_trait]
pub trait RegistryStore: Send + Sync {
    /// Load the registry. A missing file yields the built-in registry.
    async fn load(&self) -> RegistryResult<Registry>;

    /// Replace the persisted registry with `registry`, all-or-nothing.
    async fn save(&self, registry: &Registry) -> RegistryResult<()>;

    /// Human-readable location of the backing storage
    fn location(&self) -> String;
}

/// On-disk layout of the repository file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RepositoryFile {
    pub api_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated: Option<DateTime<Utc>>,

    #[serde(default)]
    pub repositories: Vec<RepositoryRecord>,
}

/// One repository as written in the file
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct RepositoryRecord {
    #[validate(length(min = 1, max = 50))]
    pub name: String,

    #[validate(length(min = 1))]
    pub url: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub default: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<&RepositoryEntry> for RepositoryRecord {
    fn from(entry: &RepositoryEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            url: entry.url.to_string(),
            default: entry.is_default,
        }
    }
}

/// Store behaviour switches
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Whether to copy the previous file aside before replacing it
    pub create_backup: bool,

    /// Maximum number of backup files to keep
    pub max_backups: usize,

    /// Whether to create the parent directory on save
    pub create_parent_dirs: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            create_backup: true,
            max_backups: 3,
            create_parent_dirs: true,
        }
    }
}

/// YAML file backed registry store
#[derive(Debug, Clone)]
pub struct YamlRegistryStore {
    path: PathBuf,
    options: StoreOptions,
}

impl YamlRegistryStore {
    /// Create a store for the given repository file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            options: StoreOptions::default(),
        }
    }

    /// Create a store with custom options
    pub fn with_options(path: impl Into<PathBuf>, options: StoreOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    /// Create a store for the repository file under a tplrepo home directory
    pub fn in_home(home: &Path) -> Self {
        Self::new(Self::repository_file_path(home))
    }

    /// `<home>/repository/repository.yaml`
    pub fn repository_file_path(home: &Path) -> PathBuf {
        home.join("repository").join(REPOSITORY_FILE_NAME)
    }

    /// Default home directory (`~/.tplrepo`)
    pub fn default_home() -> RegistryResult<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".tplrepo"))
            .ok_or_else(|| {
                RegistryError::io_error(
                    "Could not determine the home directory; use --home or TPLREPO_HOME",
                    None,
                )
            })
    }

    /// Path of the repository file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse repository file content into a validated registry
    pub fn decode(content: &str, path: &Path) -> RegistryResult<Registry> {
        if content.trim().is_empty() {
            return Err(RegistryError::parse_error("repository file is empty", path));
        }

        let file: RepositoryFile = serde_yaml::from_str(content)
            .map_err(|e| RegistryError::parse_error_with_source(e.to_string(), path, e))?;

        if file.api_version != API_VERSION {
            return Err(RegistryError::parse_error(
                format!(
                    "unsupported apiVersion '{}' (expected '{}')",
                    file.api_version, API_VERSION
                ),
                path,
            ));
        }

        let mut entries = Vec::with_capacity(file.repositories.len());
        for (index, record) in file.repositories.iter().enumerate() {
            record.validate().map_err(|e| {
                RegistryError::parse_error_with_source(
                    format!("repositories[{}]: {}", index, e),
                    path,
                    e,
                )
            })?;

            let entry = RepositoryEntry::parse(&record.name, &record.url)
                .map_err(|e| {
                    RegistryError::parse_error(format!("repositories[{}]: {}", index, e), path)
                })?
                .with_default(record.default);
            entries.push(entry);
        }

        Registry::from_entries(entries)
            .map_err(|e| RegistryError::parse_error(e.to_string(), path))
    }

    /// Serialize a registry into repository file content
    pub fn encode(registry: &Registry) -> RegistryResult<String> {
        let file = RepositoryFile {
            api_version: API_VERSION.to_string(),
            generated: Some(Utc::now()),
            repositories: registry.iter().map(RepositoryRecord::from).collect(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// Write content to a temporary file next to the target, then rename it over
    /// the target so readers only ever see a complete file.
    async fn atomic_write(&self, content: &str) -> RegistryResult<()> {
        let temp_path = self.temp_path();
        let failure = || {
            format!(
                "Failed to save repository file {}; the change was not saved",
                self.path.display()
            )
        };

        let write_result: std::io::Result<()> = async {
            let mut file = async_fs::File::create(&temp_path).await?;
            file.write_all(content.as_bytes()).await?;
            file.sync_all().await?;
            drop(file);
            async_fs::rename(&temp_path, &self.path).await
        }
        .await;

        if write_result.is_err() {
            let _ = async_fs::remove_file(&temp_path).await;
        }

        write_result.with_io_error(failure(), Some(self.path.clone()))
    }

    fn temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| REPOSITORY_FILE_NAME.to_string());
        self.path
            .with_file_name(format!(".{}.tmp.{}", file_name, std::process::id()))
    }

    fn backup_prefix(&self) -> String {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| REPOSITORY_FILE_NAME.to_string());
        format!("{}.bak_", file_name)
    }

    /// Create backup of the current repository file
    async fn create_backup(&self) -> RegistryResult<()> {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S%3f");
        let backup_path = self
            .path
            .with_file_name(format!("{}{}", self.backup_prefix(), timestamp));

        async_fs::copy(&self.path, &backup_path)
            .await
            .with_io_error("Backup operation failed", Some(backup_path.clone()))?;
        debug!("Created backup {}", backup_path.display());

        self.cleanup_old_backups().await
    }

    /// Remove all but the newest `max_backups` backups
    async fn cleanup_old_backups(&self) -> RegistryResult<()> {
        let parent = self.path.parent().unwrap_or(Path::new("."));
        let prefix = self.backup_prefix();
        let mut backups = Vec::new();

        let mut entries = async_fs::read_dir(parent)
            .await
            .with_io_error("Failed to list backups", Some(parent.to_path_buf()))?;
        while let Some(entry) = entries
            .next_entry()
            .await
            .with_io_error("Failed to list backups", Some(parent.to_path_buf()))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(&prefix) {
                backups.push(entry.path());
            }
        }

        // Timestamps sort lexicographically; newest first
        backups.sort();
        backups.reverse();

        for old_backup in backups.into_iter().skip(self.options.max_backups) {
            async_fs::remove_file(&old_backup)
                .await
                .with_io_error("Failed to remove old backup", Some(old_backup.clone()))?;
            debug!("Removed old backup {}", old_backup.display());
        }

        Ok(())
    }
}

#[async_trait]
impl RegistryStore for YamlRegistryStore {
    async fn load(&self) -> RegistryResult<Registry> {
        match async_fs::read(&self.path).await {
            Ok(bytes) => {
                let content = String::from_utf8(bytes).map_err(|e| {
                    RegistryError::parse_error_with_source(
                        "repository file is not valid UTF-8",
                        &self.path,
                        e,
                    )
                })?;
                let registry = Self::decode(&content, &self.path)?;
                debug!(
                    "Loaded {} repositories from {}",
                    registry.len(),
                    self.path.display()
                );
                Ok(registry)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    "Repository file {} not found, using built-in repositories",
                    self.path.display()
                );
                Ok(Registry::builtin())
            }
            Err(e) => Err(RegistryError::io_error_with_source(
                format!(
                    "Failed to read repository file {}: {}",
                    self.path.display(),
                    e
                ),
                Some(self.path.clone()),
                e,
            )),
        }
    }

    async fn save(&self, registry: &Registry) -> RegistryResult<()> {
        let content = Self::encode(registry)?;

        if let Some(parent) = self.path.parent() {
            if self.options.create_parent_dirs && !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await.with_io_error(
                    format!(
                        "Failed to create directory {}; the change was not saved",
                        parent.display()
                    ),
                    Some(parent.to_path_buf()),
                )?;
            }
        }

        if self.options.create_backup && async_fs::try_exists(&self.path).await.unwrap_or(false) {
            if let Err(e) = self.create_backup().await {
                warn!("Could not back up {}: {}", self.path.display(), e);
            }
        }

        self.atomic_write(&content).await?;
        info!(
            "Saved {} repositories to {}",
            registry.len(),
            self.path.display()
        );
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
