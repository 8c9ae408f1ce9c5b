pub mod add;
pub mod list;
pub mod remove;
pub mod set_default;

pub use add::AddCommand;
pub use list::ListCommand;
pub use remove::RemoveCommand;
pub use set_default::SetDefaultCommand;
