//! Read-only item lookup.

use async_trait::async_trait;

use lendhub_core::result::AppResult;
use lendhub_core::types::ItemId;

use super::model::Item;

/// Read-only access to the item directory.
#[async_trait]
pub trait ItemDirectory: Send + Sync {
    /// Whether an item with the given id exists.
    async fn exists(&self, id: ItemId) -> AppResult<bool>;

    /// Look up an item by id.
    async fn get(&self, id: ItemId) -> AppResult<Option<Item>>;
}
