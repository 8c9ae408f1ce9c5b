use anyhow::Result;
use colored::Colorize;

use crate::application::use_cases::list_repositories::{ListOutcome, ListRepositoriesUseCase};
use crate::common::error::RegistryError;
use crate::infrastructure::filesystem::registry_store::RegistryStore;
use crate::presentation::cli::OutputFormat;

/// Handler for `repo list`
pub struct ListCommand {
    pub format: OutputFormat,
}

impl ListCommand {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub async fn execute(&self, store: &dyn RegistryStore) -> Result<()> {
        let outcome = ListRepositoriesUseCase::new().execute(store).await?;

        match self.format {
            OutputFormat::Text => print!("{}", render_table(&outcome)),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(outcome.entries())
                    .map_err(RegistryError::from)?;
                println!("{}", json);
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(outcome.entries()).map_err(RegistryError::from)?;
                print!("{}", yaml);
            }
        }
        Ok(())
    }
}

/// Render entries as a two-column table. The default entry is marked with `*`.
pub fn render_table(outcome: &ListOutcome) -> String {
    let default_name = outcome.default_name();
    let rows: Vec<(String, &str)> = (&outcome.registry)
        .into_iter()
        .map(|entry| {
            let marker = if Some(entry.name.as_str()) == default_name {
                "*"
            } else {
                ""
            };
            (format!("{}{}", marker, entry.name), entry.url.as_str())
        })
        .collect();

    // Padding counts chars, not bytes
    let width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .chain(std::iter::once("NAME".len()))
        .max()
        .unwrap_or(0);

    let mut table = format!("{:<width$}  {}\n", "NAME".bold(), "URL".bold(), width = width);
    for (name, url) in rows {
        table.push_str(&format!("{:<width$}  {}\n", name, url, width = width));
    }
    table
}
