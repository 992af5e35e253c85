//! Append-only comment storage.

use async_trait::async_trait;

use lendhub_core::result::AppResult;
use lendhub_core::types::ItemId;

use super::model::{Comment, CreateComment};

/// Append-only comment storage, keyed by item.
#[async_trait]
pub trait CommentStore: Send + Sync {
    /// Append a comment and return it with its assigned id and timestamp.
    async fn append(&self, data: &CreateComment) -> AppResult<Comment>;

    /// All comments for an item, oldest first.
    async fn find_by_item(&self, item: ItemId) -> AppResult<Vec<Comment>>;
}
