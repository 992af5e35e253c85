//! Item entity and directory trait.

pub mod directory;
pub mod model;

pub use directory::ItemDirectory;
pub use model::Item;
