use std::fmt;
use tracing::{debug, info};

use crate::common::result::{OptionExt, RegistryResult};
use crate::domain::entities::{known_repository_url, Registry, RepositoryEntry};
use crate::infrastructure::filesystem::registry_store::RegistryStore;

/// リポジトリ追加の設定
#[derive(Debug, Clone, Default)]
pub struct AddRepositoryConfig {
    /// 追加するリポジトリ名
    pub name: String,

    /// インデックスの所在（Noneの場合は既知のエイリアスから解決）
    pub url: Option<String>,

    /// 追加したリポジトリをデフォルトにするか
    pub set_default: bool,

    /// 保存せずに結果だけを報告するか
    pub dry_run: bool,
}

impl AddRepositoryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_set_default(mut self, set_default: bool) -> Self {
        self.set_default = set_default;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// リポジトリ追加の結果
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    /// 追加された（dry runの場合は追加される予定の）エントリ
    pub entry: RepositoryEntry,

    /// 追加後のレジストリ
    pub registry: Registry,

    /// URLを既知のエイリアスから解決したか
    pub resolved_from_alias: bool,

    /// dry runだったか
    pub dry_run: bool,
}

impl fmt::Display for AddOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(
                f,
                "Dry Run - Skip adding repository {} ({})",
                self.entry.name, self.entry.url
            )?;
            if self.entry.is_default {
                write!(f, " as the default repository")?;
            }
            return Ok(());
        }

        write!(f, "Repository {} has been added.", self.entry.name)?;
        if self.entry.is_default {
            write!(f, " It is now your default repository.")?;
        }
        Ok(())
    }
}

/// リポジトリを追加するユースケース
pub struct AddRepositoryUseCase {
    config: AddRepositoryConfig,
}

impl AddRepositoryUseCase {
    pub fn new(config: AddRepositoryConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, store: &dyn RegistryStore) -> RegistryResult<AddOutcome> {
        let mut registry = store.load().await?;

        let name = RepositoryEntry::parse_name(&self.config.name)?;
        let (url, resolved_from_alias) = match self.config.url.as_deref() {
            Some(url) => (url.to_string(), false),
            None => {
                let url = known_repository_url(name.as_str()).ok_or_validation_error(
                    "repository URL",
                    format!(
                        "no URL given and '{}' is not a known repository alias",
                        name
                    ),
                )?;
                (url.to_string(), true)
            }
        };
        let url = RepositoryEntry::parse_url(&url)?;

        let entry = RepositoryEntry::new(name, url).with_default(self.config.set_default);
        registry.insert(entry.clone())?;
        debug!(
            "Validated new repository {} ({}, remote: {})",
            entry.name,
            entry.url,
            entry.url.is_remote()
        );

        let outcome = AddOutcome {
            entry,
            registry,
            resolved_from_alias,
            dry_run: self.config.dry_run,
        };

        if self.config.dry_run {
            debug!("Dry run: not saving {}", store.location());
            return Ok(outcome);
        }

        store.save(&outcome.registry).await?;
        info!("Added repository {}", outcome.entry.name);
        Ok(outcome)
    }
}
