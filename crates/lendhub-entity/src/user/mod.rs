//! User entity and directory trait.

pub mod directory;
pub mod model;

pub use directory::UserDirectory;
pub use model::User;
