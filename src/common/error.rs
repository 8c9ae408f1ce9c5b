use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{message}")]
    ArgumentCount { message: String },

    #[error("Invalid {field}: {message}")]
    Validation {
        field: String,
        message: String,
        value: Option<String>,
    },

    #[error("Repository name '{name}' is already in use")]
    DuplicateName { name: String },

    #[error("Repository location {url} is already registered as '{existing}'")]
    DuplicateUrl { url: String, existing: String },

    #[error("Repository '{name}' is not in configured list of repositories")]
    NotFound { name: String },

    #[error("'{name}' is your default repository; cannot remove the default repository")]
    ProtectedEntry { name: String },

    #[error("Failed to parse repository file yaml {}: {message}", .path.display())]
    Parse {
        message: String,
        path: PathBuf,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("{message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl RegistryError {
    pub fn missing_argument(message: impl Into<String>) -> Self {
        Self::ArgumentCount {
            message: message.into(),
        }
    }

    pub fn validation_error(
        field: impl Into<String>,
        message: impl Into<String>,
        value: Option<String>,
    ) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
            value,
        }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn duplicate_url(url: impl Into<String>, existing: impl Into<String>) -> Self {
        Self::DuplicateUrl {
            url: url.into(),
            existing: existing.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn protected_entry(name: impl Into<String>) -> Self {
        Self::ProtectedEntry { name: name.into() }
    }

    pub fn parse_error(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Parse {
            message: message.into(),
            path: path.into(),
            source: None,
        }
    }

    pub fn parse_error_with_source(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Parse {
            message: message.into(),
            path: path.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn io_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path,
            source: None,
        }
    }

    pub fn io_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn serialization_error_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Serialization {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// True for problems with what the user asked for, as opposed to problems
    /// with the repository file itself.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::ArgumentCount { .. }
                | Self::Validation { .. }
                | Self::DuplicateName { .. }
                | Self::DuplicateUrl { .. }
                | Self::NotFound { .. }
                | Self::ProtectedEntry { .. }
        )
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(error: std::io::Error) -> Self {
        Self::io_error_with_source(format!("File system operation failed: {}", error), None, error)
    }
}

impl From<serde_yaml::Error> for RegistryError {
    fn from(error: serde_yaml::Error) -> Self {
        Self::serialization_error_with_source("YAML serialization failed", error)
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization_error_with_source("JSON serialization failed", error)
    }
}
