pub mod registry_store;

pub use registry_store::{
    RegistryStore, RepositoryFile, RepositoryRecord, StoreOptions, YamlRegistryStore,
    API_VERSION, REPOSITORY_FILE_NAME,
};
