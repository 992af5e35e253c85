//! In-memory user and item directories.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use lendhub_core::result::AppResult;
use lendhub_core::types::{ItemId, UserId};
use lendhub_entity::item::{Item, ItemDirectory};
use lendhub_entity::user::{User, UserDirectory};

/// User directory backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: DashMap<UserId, User>,
    next_id: AtomicI64,
}

impl InMemoryUserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user and return it with its assigned id.
    pub fn add(&self, name: &str, email: &str) -> User {
        let id = UserId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let user = User {
            id,
            name: name.to_string(),
            email: email.to_string(),
        };
        self.users.insert(id, user.clone());
        user
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn exists(&self, id: UserId) -> AppResult<bool> {
        Ok(self.users.contains_key(&id))
    }

    async fn get(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }
}

/// Item directory backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryItemDirectory {
    items: DashMap<ItemId, Item>,
    next_id: AtomicI64,
}

impl InMemoryItemDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// List an item and return it with its assigned id.
    pub fn add(&self, owner: UserId, name: &str, available: bool) -> Item {
        let id = ItemId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let item = Item {
            id,
            name: name.to_string(),
            description: String::new(),
            available,
            owner_id: owner,
        };
        self.items.insert(id, item.clone());
        item
    }

    /// Flip the availability flag of an item. No-op for unknown ids.
    pub fn set_available(&self, id: ItemId, available: bool) {
        if let Some(mut entry) = self.items.get_mut(&id) {
            entry.available = available;
        }
    }
}

#[async_trait]
impl ItemDirectory for InMemoryItemDirectory {
    async fn exists(&self, id: ItemId) -> AppResult<bool> {
        Ok(self.items.contains_key(&id))
    }

    async fn get(&self, id: ItemId) -> AppResult<Option<Item>> {
        Ok(self.items.get(&id).map(|entry| entry.value().clone()))
    }
}
