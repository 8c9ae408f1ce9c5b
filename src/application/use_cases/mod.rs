pub mod add_repository;
pub mod list_repositories;
pub mod remove_repository;
pub mod set_default_repository;

pub use add_repository::{AddOutcome, AddRepositoryConfig, AddRepositoryUseCase};
pub use list_repositories::{ListOutcome, ListRepositoriesUseCase};
pub use remove_repository::{RemoveOutcome, RemoveRepositoryConfig, RemoveRepositoryUseCase};
pub use set_default_repository::{
    SetDefaultOutcome, SetDefaultRepositoryConfig, SetDefaultRepositoryUseCase,
};
