//! Shared value types: typed identifiers and pagination.

pub mod id;
pub mod pagination;

pub use id::{BookingId, CommentId, ItemId, UserId};
pub use pagination::PageRequest;
