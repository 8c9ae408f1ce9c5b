use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::remove_repository::{
    RemoveRepositoryConfig, RemoveRepositoryUseCase,
};
use crate::infrastructure::filesystem::registry_store::RegistryStore;

/// Handler for `repo remove`
pub struct RemoveCommand {
    pub config: RemoveRepositoryConfig,
}

impl RemoveCommand {
    pub fn new(config: RemoveRepositoryConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self, store: &dyn RegistryStore) -> Result<()> {
        let use_case = RemoveRepositoryUseCase::new(self.config.clone());
        let outcome = use_case.execute(store).await?;

        let marker = if outcome.dry_run {
            "::".blue().bold()
        } else {
            "✓".green().bold()
        };
        println!("{} {}", marker, outcome);
        Ok(())
    }
}
