//! # tplrepo - Template Repository Manager
//!
//! `tplrepo` keeps track of the named template repositories a project
//! generator can pull stacks from. Each repository is a name plus the location
//! of its index, and exactly one of them may be marked as the default.
//!
//! ## Quick Start
//!
//! ```bash
//! tplrepo repo list
//! tplrepo repo add localhub /srv/stacks/index.yaml
//! tplrepo repo set-default localhub
//! tplrepo repo remove experimental --dryrun
//! ```
//!
//! The registry is stored in `<home>/repository/repository.yaml`:
//!
//! ```yaml
//! apiVersion: v1
//! generated: 2024-05-01T10:00:00Z
//! repositories:
//!   - name: incubator
//!     url: https://github.com/appsody/stacks/releases/latest/download/incubator-index.yaml
//!     default: true
//!   - name: localhub
//!     url: /srv/stacks/index.yaml
//! ```
//!
//! ## Architecture
//!
//! - [`domain`]: the registry, its entries and value objects
//! - [`application`]: one use case per operation (list, add, remove, set-default)
//! - [`infrastructure`]: the YAML-backed [`infrastructure::RegistryStore`]
//! - [`presentation`]: CLI interface and output formatting
//! - [`common`]: error type and result helpers
//!
//! ## Error Handling
//!
//! - [`common::error::RegistryError`]: every failure an operation can report
//! - [`common::result::RegistryResult`]: Type alias for `Result<T, RegistryError>`
//!
//! ## Examples
//!
//! ```rust,no_run
//! use tplrepo::application::use_cases::remove_repository::{
//!     RemoveRepositoryConfig, RemoveRepositoryUseCase,
//! };
//! use tplrepo::infrastructure::YamlRegistryStore;
//! use std::path::Path;
//!
//! # async fn example() -> tplrepo::Result<()> {
//! let store = YamlRegistryStore::in_home(Path::new("/home/me/.tplrepo"));
//!
//! let config = RemoveRepositoryConfig::new(vec!["experimental".to_string()])
//!     .with_dry_run(true);
//! let outcome = RemoveRepositoryUseCase::new(config).execute(&store).await?;
//!
//! println!("{}", outcome);
//! # Ok(())
//! # }
//! ```

// Documentation attributes
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod application;
pub mod common;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types for convenience
pub use crate::common::error::RegistryError;
pub use crate::common::result::RegistryResult as Result;
