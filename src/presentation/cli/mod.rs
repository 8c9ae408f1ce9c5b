pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use tracing::{debug, warn};

use crate::application::use_cases::{
    add_repository::AddRepositoryConfig, remove_repository::RemoveRepositoryConfig,
    set_default_repository::SetDefaultRepositoryConfig,
};
use crate::common::error::RegistryError;
use crate::infrastructure::filesystem::registry_store::{RegistryStore, YamlRegistryStore};
use commands::{AddCommand, ListCommand, RemoveCommand, SetDefaultCommand};

/// Output format options for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Text,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
}

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// tplrepo - Manage the template repositories used to create projects
#[derive(Parser)]
#[command(name = "tplrepo")]
#[command(about = "Manage the template repositories used to create projects")]
#[command(version, long_version = LONG_VERSION)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration home directory (defaults to ~/.tplrepo)
    #[arg(long, global = true, env = "TPLREPO_HOME")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage template repositories
    Repo {
        #[command(subcommand)]
        command: RepoCommands,
    },
}

#[derive(Subcommand)]
pub enum RepoCommands {
    /// List the configured repositories
    List {
        /// Output format (text, json, yaml)
        #[arg(short, long, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Add a repository
    ///
    /// The URL may be omitted for a well-known repository such as `experimental`.
    Add {
        /// Repository name
        name: String,

        /// Index URL or absolute path
        url: Option<String>,

        /// Make the new repository the default
        #[arg(long)]
        set_default: bool,

        /// Show what would change without saving
        #[arg(long = "dryrun", alias = "dry-run")]
        dry_run: bool,
    },

    /// Remove a repository
    Remove {
        /// Repository name
        names: Vec<String>,

        /// Show what would change without saving
        #[arg(long = "dryrun", alias = "dry-run")]
        dry_run: bool,
    },

    /// Set the default repository
    SetDefault {
        /// Repository name
        name: String,

        /// Show what would change without saving
        #[arg(long = "dryrun", alias = "dry-run")]
        dry_run: bool,
    },
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        if self.cli.no_color {
            colored::control::set_override(false);
        }

        match self.handle_command().await {
            Ok(_) => Ok(()),
            Err(e) => {
                if let Some(error) = e.downcast_ref::<RegistryError>() {
                    if !error.is_user_error() {
                        warn!("Repository file problem: {:?}", error);
                    }
                }
                eprintln!("{} {}", "Error:".red().bold(), e);
                exit(1);
            }
        }
    }

    async fn handle_command(&self) -> anyhow::Result<()> {
        let store = self.open_store()?;
        debug!("Using repository file {}", store.location());

        match &self.cli.command {
            Commands::Repo { command } => self.handle_repo_command(command, &store).await,
        }
    }

    async fn handle_repo_command(
        &self,
        command: &RepoCommands,
        store: &dyn RegistryStore,
    ) -> anyhow::Result<()> {
        match command {
            RepoCommands::List { output } => ListCommand::new(*output).execute(store).await,
            RepoCommands::Add {
                name,
                url,
                set_default,
                dry_run,
            } => {
                let mut config = AddRepositoryConfig::new(name.as_str())
                    .with_set_default(*set_default)
                    .with_dry_run(*dry_run);
                if let Some(url) = url {
                    config = config.with_url(url.as_str());
                }
                AddCommand::new(config, self.cli.verbose)
                    .execute(store)
                    .await
            }
            RepoCommands::Remove { names, dry_run } => {
                let config = RemoveRepositoryConfig::new(names.clone()).with_dry_run(*dry_run);
                RemoveCommand::new(config).execute(store).await
            }
            RepoCommands::SetDefault { name, dry_run } => {
                let config = SetDefaultRepositoryConfig::new(name.as_str()).with_dry_run(*dry_run);
                SetDefaultCommand::new(config, self.cli.verbose)
                    .execute(store)
                    .await
            }
        }
    }

    fn open_store(&self) -> anyhow::Result<YamlRegistryStore> {
        let home = match &self.cli.home {
            Some(home) => home.clone(),
            None => YamlRegistryStore::default_home()?,
        };
        Ok(YamlRegistryStore::in_home(&home))
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_remove_accepts_any_number_of_names() {
        let cli = Cli::try_parse_from(["tplrepo", "repo", "remove"]).unwrap();
        match cli.command {
            Commands::Repo {
                command: RepoCommands::Remove { names, dry_run },
            } => {
                assert!(names.is_empty());
                assert!(!dry_run);
            }
            _ => panic!("Expected remove"),
        }

        let cli =
            Cli::try_parse_from(["tplrepo", "repo", "remove", "a", "b", "--dryrun"]).unwrap();
        match cli.command {
            Commands::Repo {
                command: RepoCommands::Remove { names, dry_run },
            } => {
                assert_eq!(names, vec!["a", "b"]);
                assert!(dry_run);
            }
            _ => panic!("Expected remove"),
        }
    }

    #[test]
    fn test_global_home_flag() {
        let cli = Cli::try_parse_from([
            "tplrepo",
            "repo",
            "list",
            "--home",
            "/tmp/tplrepo-home",
            "-o",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.home, Some(PathBuf::from("/tmp/tplrepo-home")));
        match cli.command {
            Commands::Repo {
                command: RepoCommands::List { output },
            } => assert_eq!(output, OutputFormat::Json),
            _ => panic!("Expected list"),
        }
    }
}
