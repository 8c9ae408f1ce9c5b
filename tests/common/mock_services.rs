//! Mock services for testing
//!
//! This module provides mock implementations of the registry store
//! that can be used in tests to isolate units under test.

use async_trait::async_trait;
use mockall::mock;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tplrepo::common::error::RegistryError;
use tplrepo::common::result::RegistryResult;
use tplrepo::domain::entities::Registry;
use tplrepo::infrastructure::filesystem::registry_store::RegistryStore;

/// In-memory registry store
#[derive(Clone)]
pub struct InMemoryRegistryStore {
    /// Stored registry; `None` simulates an unparseable file
    registry: Arc<Mutex<Option<Registry>>>,
    /// Call history for verification
    call_history: Arc<Mutex<Vec<String>>>,
    /// Whether save should fail
    fail_save: Arc<Mutex<bool>>,
}

impl InMemoryRegistryStore {
    /// Create a store holding the given registry
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(Mutex::new(Some(registry))),
            call_history: Arc::new(Mutex::new(Vec::new())),
            fail_save: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a store whose load always fails with a parse error
    pub fn unparseable() -> Self {
        let store = Self::new(Registry::new());
        *store.registry.lock().unwrap() = None;
        store
    }

    /// Make subsequent saves fail with an I/O error
    pub fn set_fail_save(&self, fail: bool) {
        *self.fail_save.lock().unwrap() = fail;
    }

    /// Current stored registry
    pub fn registry(&self) -> Option<Registry> {
        self.registry.lock().unwrap().clone()
    }

    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        self.call_history()
            .iter()
            .filter(|call| call.as_str() == "save")
            .count()
    }
}

#[async_trait]
impl RegistryStore for InMemoryRegistryStore {
    async fn load(&self) -> RegistryResult<Registry> {
        self.call_history.lock().unwrap().push("load".to_string());
        self.registry.lock().unwrap().clone().ok_or_else(|| {
            RegistryError::parse_error(
                "mapping values are not allowed in this context",
                PathBuf::from("memory/repository.yaml"),
            )
        })
    }

    async fn save(&self, registry: &Registry) -> RegistryResult<()> {
        self.call_history.lock().unwrap().push("save".to_string());
        if *self.fail_save.lock().unwrap() {
            return Err(RegistryError::io_error(
                "Failed to save repository file memory/repository.yaml; the change was not saved",
                Some(PathBuf::from("memory/repository.yaml")),
            ));
        }
        *self.registry.lock().unwrap() = Some(registry.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory/repository.yaml".to_string()
    }
}

mock! {
    pub Store {}

    #[async_trait]
    impl RegistryStore for Store {
        async fn load(&self) -> RegistryResult<Registry>;
        async fn save(&self, registry: &Registry) -> RegistryResult<()>;
        fn location(&self) -> String;
    }
}
