//! Comment repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use lendhub_core::error::{AppError, ErrorKind};
use lendhub_core::result::AppResult;
use lendhub_core::types::ItemId;
use lendhub_entity::comment::{Comment, CommentStore, CreateComment};

/// PostgreSQL-backed append-only comment storage.
#[derive(Debug, Clone)]
pub struct CommentRepository {
    pool: PgPool,
}

impl CommentRepository {
    /// Create a new comment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentStore for CommentRepository {
    async fn append(&self, data: &CreateComment) -> AppResult<Comment> {
        sqlx::query_as::<_, Comment>(
            "INSERT INTO comments (item_id, author_id, text) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(data.item_id)
        .bind(data.author_id)
        .bind(&data.text)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to append comment", e))
    }

    async fn find_by_item(&self, item: ItemId) -> AppResult<Vec<Comment>> {
        sqlx::query_as::<_, Comment>(
            "SELECT * FROM comments WHERE item_id = $1 ORDER BY created_at ASC",
        )
        .bind(item)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list comments", e))
    }
}
