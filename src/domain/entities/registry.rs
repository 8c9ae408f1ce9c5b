use super::repository_entry::RepositoryEntry;
use crate::common::error::RegistryError;
use crate::common::result::{OptionExt, RegistryResult};
use serde::Serialize;
use std::collections::HashSet;

/// 組み込みで知られているリポジトリ（名前, インデックスURL）
///
/// 先頭がデフォルトリポジトリ。`add` の名前だけの形式はここから所在を引く。
pub const KNOWN_REPOSITORIES: &[(&str, &str)] = &[
    (
        "incubator",
        "https://github.com/appsody/stacks/releases/latest/download/incubator-index.yaml",
    ),
    (
        "experimental",
        "https://github.com/appsody/stacks/releases/latest/download/experimental-index.yaml",
    ),
];

/// 既知のエイリアスからインデックスURLを取得
pub fn known_repository_url(alias: &str) -> Option<&'static str> {
    KNOWN_REPOSITORIES
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, url)| *url)
}

/// 登録済みリポジトリの一覧
///
/// 不変条件:
/// - 名前は互いに異なる
/// - URLは互いに異なる
/// - デフォルトは高々1つ
///
/// 変更系のメソッドは全ての検証を終えてから状態を書き換えるため、
/// エラー時にレジストリが部分的に変更されることはない。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Registry {
    entries: Vec<RepositoryEntry>,
}

impl Registry {
    /// 空のレジストリを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 組み込みのレジストリを作成（リポジトリファイルが存在しない場合に使用）
    pub fn builtin() -> Self {
        let entries = KNOWN_REPOSITORIES
            .iter()
            .enumerate()
            .map(|(index, (name, url))| {
                RepositoryEntry::parse(name, url)
                    .expect("built-in repository constants are valid")
                    .with_default(index == 0)
            })
            .collect();
        Self { entries }
    }

    /// 既存のエントリ列からレジストリを構築し、不変条件を検証
    pub fn from_entries(entries: Vec<RepositoryEntry>) -> RegistryResult<Self> {
        Self::check_invariants(&entries)?;
        Ok(Self { entries })
    }

    fn check_invariants(entries: &[RepositoryEntry]) -> RegistryResult<()> {
        let mut names = HashSet::new();
        let mut urls = HashSet::new();
        let mut default_name: Option<&str> = None;

        for entry in entries {
            if !names.insert(entry.name.as_str()) {
                return Err(RegistryError::duplicate_name(entry.name.as_str()));
            }
            if !urls.insert(entry.url.as_str()) {
                return Err(RegistryError::duplicate_url(
                    entry.url.as_str(),
                    entry.name.as_str(),
                ));
            }
            if entry.is_default {
                if let Some(previous) = default_name {
                    return Err(RegistryError::validation_error(
                        "default",
                        format!(
                            "both '{}' and '{}' are marked as default",
                            previous, entry.name
                        ),
                        None,
                    ));
                }
                default_name = Some(entry.name.as_str());
            }
        }

        Ok(())
    }

    /// 名前でエントリを検索
    pub fn find_by_name(&self, name: &str) -> Option<&RepositoryEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// URLでエントリを検索
    pub fn find_by_url(&self, url: &str) -> Option<&RepositoryEntry> {
        self.entries.iter().find(|entry| entry.url.as_str() == url)
    }

    /// デフォルトのエントリを取得
    pub fn default_entry(&self) -> Option<&RepositoryEntry> {
        self.entries.iter().find(|entry| entry.is_default)
    }

    /// 名前が現在のデフォルトかどうか
    pub fn is_default(&self, name: &str) -> bool {
        self.default_entry().map_or(false, |entry| entry.name == name)
    }

    /// エントリを追加
    ///
    /// 追加するエントリがデフォルト指定の場合、既存のデフォルトは解除される。
    pub fn insert(&mut self, entry: RepositoryEntry) -> RegistryResult<()> {
        if self.find_by_name(entry.name.as_str()).is_some() {
            return Err(RegistryError::duplicate_name(entry.name.as_str()));
        }
        if let Some(existing) = self.find_by_url(entry.url.as_str()) {
            return Err(RegistryError::duplicate_url(
                entry.url.as_str(),
                existing.name.as_str(),
            ));
        }

        if entry.is_default {
            self.clear_default();
        }
        self.entries.push(entry);
        Ok(())
    }

    /// エントリを削除
    ///
    /// 現在のデフォルトは削除できない。
    pub fn delete(&mut self, name: &str) -> RegistryResult<RepositoryEntry> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.name == name)
            .ok_or_not_found(name)?;

        if self.entries[index].is_default {
            return Err(RegistryError::protected_entry(name));
        }

        Ok(self.entries.remove(index))
    }

    /// デフォルトを付け替える
    pub fn set_default(&mut self, name: &str) -> RegistryResult<()> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.name == name)
            .ok_or_not_found(name)?;

        self.clear_default();
        self.entries[index].is_default = true;
        Ok(())
    }

    /// 全エントリ（登録順）
    pub fn entries(&self) -> &[RepositoryEntry] {
        &self.entries
    }

    /// エントリのイテレータ
    pub fn iter(&self) -> std::slice::Iter<'_, RepositoryEntry> {
        self.entries.iter()
    }

    /// エントリ数
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn clear_default(&mut self) {
        for entry in &mut self.entries {
            entry.is_default = false;
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a RepositoryEntry;
    type IntoIter = std::slice::Iter<'a, RepositoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
