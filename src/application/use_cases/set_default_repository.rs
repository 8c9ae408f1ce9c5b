use std::fmt;
use tracing::{debug, info};

use crate::common::result::RegistryResult;
use crate::domain::entities::Registry;
use crate::infrastructure::filesystem::registry_store::RegistryStore;

/// デフォルト変更の設定
#[derive(Debug, Clone, Default)]
pub struct SetDefaultRepositoryConfig {
    /// 新しいデフォルトにするリポジトリ名
    pub name: String,

    /// 保存せずに結果だけを報告するか
    pub dry_run: bool,
}

impl SetDefaultRepositoryConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// デフォルト変更の結果
#[derive(Debug, Clone, PartialEq)]
pub struct SetDefaultOutcome {
    /// 新しいデフォルト
    pub name: String,

    /// 変更前のデフォルト
    pub previous: Option<String>,

    /// 変更後のレジストリ
    pub registry: Registry,

    /// 既にデフォルトだったか（この場合は保存しない）
    pub unchanged: bool,

    /// dry runだったか
    pub dry_run: bool,
}

impl fmt::Display for SetDefaultOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unchanged {
            write!(f, "Repository {} is already your default repository.", self.name)
        } else if self.dry_run {
            write!(f, "Dry Run - Skip setting {} as the default repository", self.name)
        } else {
            write!(f, "Your default repository is now set to {}.", self.name)
        }
    }
}

/// デフォルトリポジトリを付け替えるユースケース
pub struct SetDefaultRepositoryUseCase {
    config: SetDefaultRepositoryConfig,
}

impl SetDefaultRepositoryUseCase {
    pub fn new(config: SetDefaultRepositoryConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, store: &dyn RegistryStore) -> RegistryResult<SetDefaultOutcome> {
        let mut registry = store.load().await?;
        let name = self.config.name.as_str();

        let previous = registry
            .default_entry()
            .map(|entry| entry.name.to_string());
        let unchanged = previous.as_deref() == Some(name);

        if !unchanged {
            registry.set_default(name)?;
        }

        let outcome = SetDefaultOutcome {
            name: name.to_string(),
            previous,
            registry,
            unchanged,
            dry_run: self.config.dry_run,
        };

        if outcome.unchanged {
            debug!("{} is already the default; nothing to save", name);
            return Ok(outcome);
        }
        if self.config.dry_run {
            debug!("Dry run: not saving {}", store.location());
            return Ok(outcome);
        }

        store.save(&outcome.registry).await?;
        info!("Default repository is now {}", name);
        Ok(outcome)
    }
}
