//! Item entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lendhub_core::types::{ItemId, UserId};

/// A shareable item listed by its owner.
///
/// The booking core reads items for ownership and availability; it never
/// mutates them. Listing management lives outside this workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: ItemId,
    /// Short display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Whether the owner currently accepts bookings for this item.
    pub available: bool,
    /// The listing user.
    pub owner_id: UserId,
}
