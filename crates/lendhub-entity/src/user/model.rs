//! User entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lendhub_core::types::UserId;

/// A registered user.
///
/// The booking core only ever consults users for existence and identity;
/// profile management lives outside this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
}
