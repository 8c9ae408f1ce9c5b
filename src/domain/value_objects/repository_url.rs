use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// リポジトリURL関連のエラー
#[derive(Debug, Error, PartialEq)]
pub enum RepositoryUrlError {
    #[error("repository location must not be empty")]
    Empty,

    #[error("relative location {0:?} is not allowed; use an absolute path or a URL")]
    RelativeLocation(String),

    #[error("unsupported URL scheme: {0}")]
    UnsupportedScheme(String),

    #[error("missing host in URL: {0}")]
    MissingHost(String),

    #[error("invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("control character in location: {0:?}")]
    InvalidCharacters(String),
}

/// リポジトリの所在の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    /// http/httpsで取得するリモートのインデックス
    Remote,
    /// ローカルファイル（絶対パスまたはfile URL）
    Local,
}

/// リポジトリのインデックスの所在を表す値オブジェクト
///
/// 入力された文字列はそのまま保持し、検証のみを行う。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepositoryUrl {
    /// 入力された所在文字列
    url: String,

    /// 所在の種類
    kind: LocationKind,
}

impl RepositoryUrl {
    /// 新しいRepositoryUrlインスタンスを作成
    pub fn new(location: &str) -> Result<Self, RepositoryUrlError> {
        let trimmed = location.trim();

        if trimmed.is_empty() {
            return Err(RepositoryUrlError::Empty);
        }

        if trimmed.chars().any(|ch| ch.is_control()) {
            return Err(RepositoryUrlError::InvalidCharacters(trimmed.to_string()));
        }

        // Windowsのドライブレターが URL スキームと解釈されないよう先にパスとして判定
        if Path::new(trimmed).is_absolute() {
            return Ok(Self {
                url: trimmed.to_string(),
                kind: LocationKind::Local,
            });
        }

        let parsed = match Url::parse(trimmed) {
            Ok(parsed) => parsed,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                return Err(RepositoryUrlError::RelativeLocation(trimmed.to_string()))
            }
            Err(e) => {
                return Err(RepositoryUrlError::InvalidFormat(format!(
                    "{}: {}",
                    trimmed, e
                )))
            }
        };

        let kind = match parsed.scheme() {
            "http" | "https" => {
                match parsed.host_str() {
                    Some(host) if !host.is_empty() => {}
                    _ => return Err(RepositoryUrlError::MissingHost(trimmed.to_string())),
                }
                LocationKind::Remote
            }
            "file" => LocationKind::Local,
            other => return Err(RepositoryUrlError::UnsupportedScheme(other.to_string())),
        };

        Ok(Self {
            url: trimmed.to_string(),
            kind,
        })
    }

    /// URL文字列を取得
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// 所在の種類を取得
    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    /// リモートのインデックスかどうか
    pub fn is_remote(&self) -> bool {
        self.kind == LocationKind::Remote
    }
}

impl fmt::Display for RepositoryUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for RepositoryUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.url)
    }
}
