pub mod registry;
pub mod repository_entry;

pub use registry::{known_repository_url, Registry, KNOWN_REPOSITORIES};
pub use repository_entry::RepositoryEntry;
