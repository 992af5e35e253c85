//! Comment entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lendhub_core::types::{CommentId, ItemId, UserId};

/// A renter's comment on an item after a completed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: CommentId,
    /// The commented item.
    pub item_id: ItemId,
    /// The commenting user.
    pub author_id: UserId,
    /// Comment body.
    pub text: String,
    /// When the comment was written.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a new comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateComment {
    /// The commented item.
    pub item_id: ItemId,
    /// The commenting user.
    pub author_id: UserId,
    /// Comment body.
    pub text: String,
}
