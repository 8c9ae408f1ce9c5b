use crate::common::result::RegistryResult;
use crate::domain::entities::{Registry, RepositoryEntry};
use crate::infrastructure::filesystem::registry_store::RegistryStore;
use tracing::debug;

/// 一覧取得の結果
#[derive(Debug, Clone, PartialEq)]
pub struct ListOutcome {
    /// 読み込んだレジストリ
    pub registry: Registry,
}

impl ListOutcome {
    /// 登録順のエントリ
    pub fn entries(&self) -> &[RepositoryEntry] {
        self.registry.entries()
    }

    /// デフォルトリポジトリの名前
    pub fn default_name(&self) -> Option<&str> {
        self.registry.default_entry().map(|entry| entry.name.as_str())
    }
}

/// 登録済みリポジトリの一覧を取得するユースケース
///
/// 副作用はなく、リポジトリファイルの読み込みエラーのみを返す。
#[derive(Debug, Clone, Default)]
pub struct ListRepositoriesUseCase;

impl ListRepositoriesUseCase {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(&self, store: &dyn RegistryStore) -> RegistryResult<ListOutcome> {
        let registry = store.load().await?;
        debug!(
            "Listing {} repositories from {}",
            registry.len(),
            store.location()
        );
        Ok(ListOutcome { registry })
    }
}
