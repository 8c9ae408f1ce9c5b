pub mod error;
pub mod result;

pub use error::RegistryError;
pub use result::RegistryResult;
