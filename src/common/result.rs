use crate::common::error::RegistryError;
use std::path::PathBuf;

/// tplrepo全体で使用するResult型のエイリアス
///
/// # Examples
///
/// ```
/// use tplrepo::common::result::RegistryResult;
/// use tplrepo::common::error::RegistryError;
///
/// fn example_function() -> RegistryResult<String> {
///     Ok("success".to_string())
/// }
///
/// fn example_with_error() -> RegistryResult<()> {
///     Err(RegistryError::not_found("incubator"))
/// }
/// ```
pub type RegistryResult<T> = Result<T, RegistryError>;

/// OptionをRegistryResultに変換するためのヘルパー
pub trait OptionExt<T> {
    /// Noneの場合にNotFoundエラーを返す
    ///
    /// # Examples
    ///
    /// ```
    /// use tplrepo::common::result::{RegistryResult, OptionExt};
    ///
    /// let none_value: Option<String> = None;
    /// let result: RegistryResult<String> = none_value.ok_or_not_found("incubator");
    /// assert!(result.is_err());
    /// ```
    fn ok_or_not_found(self, name: impl Into<String>) -> RegistryResult<T>;

    /// Noneの場合にValidationエラーを返す
    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> RegistryResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, name: impl Into<String>) -> RegistryResult<T> {
        self.ok_or_else(|| RegistryError::not_found(name))
    }

    fn ok_or_validation_error(
        self,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> RegistryResult<T> {
        self.ok_or_else(|| RegistryError::validation_error(field, message, None))
    }
}

/// std::io::ResultをRegistryResultに変換するためのヘルパー
pub trait IoResultExt<T> {
    /// I/OエラーにメッセージとパスをつけてRegistryError::Ioに変換
    ///
    /// # Examples
    ///
    /// ```
    /// use tplrepo::common::result::{RegistryResult, IoResultExt};
    ///
    /// let result: std::io::Result<String> = Err(std::io::Error::new(
    ///     std::io::ErrorKind::PermissionDenied, "denied"
    /// ));
    /// let mapped: RegistryResult<String> = result.with_io_error("Failed to write", None);
    /// assert!(mapped.is_err());
    /// ```
    fn with_io_error(self, message: impl Into<String>, path: Option<PathBuf>)
        -> RegistryResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_io_error(
        self,
        message: impl Into<String>,
        path: Option<PathBuf>,
    ) -> RegistryResult<T> {
        self.map_err(|e| {
            let message = format!("{}: {}", message.into(), e);
            RegistryError::io_error_with_source(message, path, e)
        })
    }
}
