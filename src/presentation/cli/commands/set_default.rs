use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::set_default_repository::{
    SetDefaultRepositoryConfig, SetDefaultRepositoryUseCase,
};
use crate::infrastructure::filesystem::registry_store::RegistryStore;

/// Handler for `repo set-default`
pub struct SetDefaultCommand {
    pub config: SetDefaultRepositoryConfig,
    pub verbose: bool,
}

impl SetDefaultCommand {
    pub fn new(config: SetDefaultRepositoryConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    pub async fn execute(&self, store: &dyn RegistryStore) -> Result<()> {
        let use_case = SetDefaultRepositoryUseCase::new(self.config.clone());
        let outcome = use_case.execute(store).await?;

        if outcome.dry_run && !outcome.unchanged {
            println!("{} {}", "::".blue().bold(), outcome);
        } else {
            println!("{} {}", "✓".green().bold(), outcome);
        }

        if self.verbose {
            if let Some(previous) = outcome.previous.as_deref().filter(|_| !outcome.unchanged) {
                println!("  Previous default: {}", previous);
            }
        }
        Ok(())
    }
}
