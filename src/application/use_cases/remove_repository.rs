use std::fmt;
use tracing::{debug, info};

use crate::common::error::RegistryError;
use crate::common::result::RegistryResult;
use crate::domain::entities::{Registry, RepositoryEntry};
use crate::infrastructure::filesystem::registry_store::RegistryStore;

/// リポジトリ削除の設定
///
/// `names` はコマンドラインから受け取った位置引数そのもの。
/// 個数の検証はユースケース側で行う。
#[derive(Debug, Clone, Default)]
pub struct RemoveRepositoryConfig {
    /// 削除対象の名前（ちょうど1つであること）
    pub names: Vec<String>,

    /// 保存せずに結果だけを報告するか
    pub dry_run: bool,
}

impl RemoveRepositoryConfig {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            dry_run: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// リポジトリ削除の結果
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveOutcome {
    /// 削除された（dry runの場合は削除される予定の）エントリ
    pub removed: RepositoryEntry,

    /// 削除後のレジストリ
    pub registry: Registry,

    /// dry runだったか
    pub dry_run: bool,
}

impl fmt::Display for RemoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.dry_run {
            write!(
                f,
                "Dry Run - Skip removing repository '{}' ({})",
                self.removed.name, self.removed.url
            )
        } else {
            write!(f, "The {} repository has been removed.", self.removed.name)
        }
    }
}

/// リポジトリを削除するユースケース
///
/// 手順:
/// 1. リポジトリファイルを読み込む（壊れていればParseエラー）
/// 2. 引数の個数を検証する
/// 3. メモリ上で削除し、dry runでなければ保存する
pub struct RemoveRepositoryUseCase {
    config: RemoveRepositoryConfig,
}

impl RemoveRepositoryUseCase {
    pub fn new(config: RemoveRepositoryConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, store: &dyn RegistryStore) -> RegistryResult<RemoveOutcome> {
        let mut registry = store.load().await?;

        let name = match self.config.names.as_slice() {
            [] => {
                return Err(RegistryError::missing_argument(
                    "You must specify repository name",
                ))
            }
            [name] => name.as_str(),
            _ => {
                return Err(RegistryError::missing_argument(
                    "One argument expected. Use 'tplrepo repo remove -h' for usage.",
                ))
            }
        };

        let removed = registry.delete(name)?;
        debug!("Removed {} ({}) in memory", removed.name, removed.url);

        let outcome = RemoveOutcome {
            removed,
            registry,
            dry_run: self.config.dry_run,
        };

        if self.config.dry_run {
            debug!("Dry run: not saving {}", store.location());
            return Ok(outcome);
        }

        store.save(&outcome.registry).await?;
        info!("Removed repository {}", outcome.removed.name);
        Ok(outcome)
    }
}
