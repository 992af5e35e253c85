//! Item directory implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use lendhub_core::error::{AppError, ErrorKind};
use lendhub_core::result::AppResult;
use lendhub_core::types::ItemId;
use lendhub_entity::item::{Item, ItemDirectory};

/// PostgreSQL-backed item lookup.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemDirectory for ItemRepository {
    async fn exists(&self, id: ItemId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM items WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check item existence", e)
            })
    }

    async fn get(&self, id: ItemId) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item", e))
    }
}
