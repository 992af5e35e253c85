//! Comment entity and append-only store trait.

pub mod model;
pub mod store;

pub use model::{Comment, CreateComment};
pub use store::CommentStore;
