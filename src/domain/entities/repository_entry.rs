use crate::common::error::RegistryError;
use crate::common::result::RegistryResult;
use crate::domain::value_objects::{repository_name::RepositoryName, repository_url::RepositoryUrl};
use serde::Serialize;

/// レジストリのエントリ（テンプレートリポジトリの所在）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryEntry {
    /// リポジトリ名
    pub name: RepositoryName,

    /// インデックスの所在
    pub url: RepositoryUrl,

    /// デフォルトリポジトリかどうか
    #[serde(rename = "default")]
    pub is_default: bool,
}

impl RepositoryEntry {
    /// 新しいRepositoryEntryインスタンスを作成
    pub fn new(name: RepositoryName, url: RepositoryUrl) -> Self {
        Self {
            name,
            url,
            is_default: false,
        }
    }

    /// 文字列から検証付きでエントリを作成
    ///
    /// 不正な値はValidationエラーとして返す。
    pub fn parse(name: &str, url: &str) -> RegistryResult<Self> {
        Ok(Self::new(Self::parse_name(name)?, Self::parse_url(url)?))
    }

    /// 名前を検証してRepositoryNameに変換
    pub fn parse_name(name: &str) -> RegistryResult<RepositoryName> {
        RepositoryName::new(name).map_err(|e| {
            RegistryError::validation_error("repository name", e.to_string(), Some(name.to_string()))
        })
    }

    /// 所在を検証してRepositoryUrlに変換
    pub fn parse_url(url: &str) -> RegistryResult<RepositoryUrl> {
        RepositoryUrl::new(url).map_err(|e| {
            RegistryError::validation_error("repository URL", e.to_string(), Some(url.to_string()))
        })
    }

    /// デフォルトフラグを設定
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = RepositoryEntry::parse("localhub", "file:///tmp/index.yaml").unwrap();
        assert_eq!(entry.name.as_str(), "localhub");
        assert_eq!(entry.url.as_str(), "file:///tmp/index.yaml");
        assert!(!entry.is_default);
    }

    #[test]
    fn test_entry_builder() {
        let entry = RepositoryEntry::parse("incubator", "https://example.com/index.yaml")
            .unwrap()
            .with_default(true);
        assert!(entry.is_default);
    }

    #[test]
    fn test_invalid_name_is_validation_error() {
        let result = RepositoryEntry::parse("bad/name", "https://example.com/index.yaml");
        match result {
            Err(RegistryError::Validation { field, value, .. }) => {
                assert_eq!(field, "repository name");
                assert_eq!(value.as_deref(), Some("bad/name"));
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_url_is_validation_error() {
        let result = RepositoryEntry::parse("stacks", "not a url");
        assert!(matches!(
            result,
            Err(RegistryError::Validation { ref field, .. }) if field == "repository URL"
        ));
    }
}
