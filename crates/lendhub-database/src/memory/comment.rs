//! In-memory comment store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use lendhub_core::result::AppResult;
use lendhub_core::types::{CommentId, ItemId};
use lendhub_entity::comment::{Comment, CommentStore, CreateComment};

/// Comment storage backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryCommentStore {
    comments: DashMap<CommentId, Comment>,
    next_id: AtomicI64,
}

impl InMemoryCommentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CommentStore for InMemoryCommentStore {
    async fn append(&self, data: &CreateComment) -> AppResult<Comment> {
        let id = CommentId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let comment = Comment {
            id,
            item_id: data.item_id,
            author_id: data.author_id,
            text: data.text.clone(),
            created_at: Utc::now(),
        };
        self.comments.insert(id, comment.clone());
        Ok(comment)
    }

    async fn find_by_item(&self, item: ItemId) -> AppResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|entry| entry.value().item_id == item)
            .map(|entry| entry.value().clone())
            .collect();
        comments.sort_by_key(|c| (c.created_at, c.id));
        Ok(comments)
    }
}
