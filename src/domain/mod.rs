/// Domain layer: the repository registry and its value objects
pub mod entities;
pub mod value_objects;
