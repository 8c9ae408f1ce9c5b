use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::add_repository::{AddRepositoryConfig, AddRepositoryUseCase};
use crate::domain::value_objects::LocationKind;
use crate::infrastructure::filesystem::registry_store::RegistryStore;

/// Handler for `repo add`
pub struct AddCommand {
    pub config: AddRepositoryConfig,
    pub verbose: bool,
}

impl AddCommand {
    pub fn new(config: AddRepositoryConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    pub async fn execute(&self, store: &dyn RegistryStore) -> Result<()> {
        let use_case = AddRepositoryUseCase::new(self.config.clone());
        let outcome = use_case.execute(store).await?;

        if outcome.dry_run {
            println!("{} {}", "::".blue().bold(), outcome);
            return Ok(());
        }

        println!("{} {}", "✓".green().bold(), outcome);
        if self.verbose {
            if outcome.resolved_from_alias {
                println!("  Resolved known repository {}", outcome.entry.name);
            }
            let kind = match outcome.entry.url.kind() {
                LocationKind::Remote => "remote index",
                LocationKind::Local => "local index",
            };
            println!("  URL: {} ({})", outcome.entry.url, kind);
            println!("  Saved to: {}", store.location());
        }
        Ok(())
    }
}
