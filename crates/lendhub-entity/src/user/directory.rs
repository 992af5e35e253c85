//! Read-only user lookup.

use async_trait::async_trait;

use lendhub_core::result::AppResult;
use lendhub_core::types::UserId;

use super::model::User;

/// Read-only access to the user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Whether a user with the given id exists.
    async fn exists(&self, id: UserId) -> AppResult<bool>;

    /// Look up a user by id.
    async fn get(&self, id: UserId) -> AppResult<Option<User>>;
}
