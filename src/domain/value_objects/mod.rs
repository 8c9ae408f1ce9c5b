pub mod repository_name;
pub mod repository_url;

pub use repository_name::{RepositoryName, RepositoryNameError};
pub use repository_url::{LocationKind, RepositoryUrl, RepositoryUrlError};
