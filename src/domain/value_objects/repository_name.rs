use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// リポジトリ名関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum RepositoryNameError {
    #[error("repository name must not be empty")]
    Empty,

    #[error("repository name must be {max} characters or fewer (got {len})")]
    TooLong { len: usize, max: usize },

    #[error("repository name must not start with '{0}'")]
    InvalidPrefix(char),

    #[error("repository name contains path separators, whitespace or control characters: {0:?}")]
    InvalidCharacters(String),
}

/// リポジトリ名の値オブジェクト
///
/// レジストリ内でエントリを一意に識別する。大文字小文字は区別する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RepositoryName(String);

impl RepositoryName {
    /// 名前の最大長
    pub const MAX_LEN: usize = 50;

    /// 新しいRepositoryNameインスタンスを作成
    pub fn new(name: &str) -> Result<Self, RepositoryNameError> {
        if name.is_empty() {
            return Err(RepositoryNameError::Empty);
        }

        let len = name.chars().count();
        if len > Self::MAX_LEN {
            return Err(RepositoryNameError::TooLong {
                len,
                max: Self::MAX_LEN,
            });
        }

        // オプションや隠しファイルと紛らわしい名前を拒否
        if let Some(first) = name.chars().next() {
            if first == '-' || first == '.' {
                return Err(RepositoryNameError::InvalidPrefix(first));
            }
        }

        if !Self::pattern().is_match(name) {
            return Err(RepositoryNameError::InvalidCharacters(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }

    /// 名前を文字列として取得
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn pattern() -> &'static Regex {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        PATTERN.get_or_init(|| {
            Regex::new(r"^[^/\\\s\p{Cc}]+$").expect("repository name pattern is valid")
        })
    }
}

impl fmt::Display for RepositoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RepositoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for RepositoryName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RepositoryName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["incubator", "my-stacks", "Team_Repo2", "localhub", "a"] {
            let parsed = RepositoryName::new(name).unwrap();
            assert_eq!(parsed.as_str(), name);
        }
    }

    #[test]
    fn test_empty_name() {
        assert_eq!(RepositoryName::new(""), Err(RepositoryNameError::Empty));
    }

    #[test]
    fn test_too_long_name() {
        let name = "x".repeat(RepositoryName::MAX_LEN + 1);
        assert!(matches!(
            RepositoryName::new(&name),
            Err(RepositoryNameError::TooLong { len: 51, max: 50 })
        ));

        let name = "x".repeat(RepositoryName::MAX_LEN);
        assert!(RepositoryName::new(&name).is_ok());
    }

    #[test]
    fn test_path_separators_rejected() {
        assert!(matches!(
            RepositoryName::new("team/stacks"),
            Err(RepositoryNameError::InvalidCharacters(_))
        ));
        assert!(matches!(
            RepositoryName::new("team\\stacks"),
            Err(RepositoryNameError::InvalidCharacters(_))
        ));
    }

    #[test]
    fn test_whitespace_and_control_characters_rejected() {
        for name in ["my repo", "tab\there", "bell\u{7}", "new\nline"] {
            assert!(
                matches!(
                    RepositoryName::new(name),
                    Err(RepositoryNameError::InvalidCharacters(_))
                ),
                "{:?} should be rejected",
                name
            );
        }
    }

    #[test]
    fn test_leading_dash_or_dot_rejected() {
        assert_eq!(
            RepositoryName::new("--dryrun"),
            Err(RepositoryNameError::InvalidPrefix('-'))
        );
        assert_eq!(
            RepositoryName::new(".."),
            Err(RepositoryNameError::InvalidPrefix('.'))
        );
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let lower = RepositoryName::new("incubator").unwrap();
        let upper = RepositoryName::new("Incubator").unwrap();
        assert_ne!(lower, upper);
        assert!(lower == "incubator");
    }
}
