/// Infrastructure layer modules
///
/// This layer provides concrete implementations for external system interactions:
/// - File system persistence of the repository registry
pub mod filesystem;

// Re-export commonly used types
pub use filesystem::registry_store::{RegistryStore, StoreOptions, YamlRegistryStore};
