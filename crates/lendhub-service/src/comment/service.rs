//! Comment service.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use lendhub_core::types::{ItemId, UserId};
use lendhub_entity::booking::{BookingError, BookingStore};
use lendhub_entity::comment::{Comment, CommentStore, CreateComment};
use lendhub_entity::item::ItemDirectory;
use lendhub_entity::user::UserDirectory;

use crate::BookingResult;

/// Appends renter comments to items after completed rentals.
#[derive(Clone)]
pub struct CommentService {
    /// Comment storage.
    comments: Arc<dyn CommentStore>,
    /// Booking storage, consulted for the completed-rental rule.
    bookings: Arc<dyn BookingStore>,
    /// User directory for existence checks.
    users: Arc<dyn UserDirectory>,
    /// Item directory for existence checks.
    items: Arc<dyn ItemDirectory>,
}

impl CommentService {
    /// Creates a new comment service.
    pub fn new(
        comments: Arc<dyn CommentStore>,
        bookings: Arc<dyn BookingStore>,
        users: Arc<dyn UserDirectory>,
        items: Arc<dyn ItemDirectory>,
    ) -> Self {
        Self {
            comments,
            bookings,
            users,
            items,
        }
    }

    /// Append a comment on an item.
    ///
    /// Only a user with at least one approved booking of the item that
    /// has already ended may comment.
    pub async fn add_comment(
        &self,
        author: UserId,
        item: ItemId,
        text: String,
    ) -> BookingResult<Comment> {
        if !self.users.exists(author).await? {
            return Err(BookingError::UserNotFound(author));
        }
        if !self.items.exists(item).await? {
            return Err(BookingError::ItemNotFound(item));
        }
        if !self
            .bookings
            .has_completed_booking(author, item, Utc::now())
            .await?
        {
            return Err(BookingError::NoCompletedBooking { user: author, item });
        }

        let comment = self
            .comments
            .append(&CreateComment {
                item_id: item,
                author_id: author,
                text,
            })
            .await?;

        info!(
            comment_id = %comment.id,
            item_id = %item,
            author_id = %author,
            "Comment added"
        );

        Ok(comment)
    }

    /// All comments on an item, oldest first.
    pub async fn find_for_item(&self, item: ItemId) -> BookingResult<Vec<Comment>> {
        if !self.items.exists(item).await? {
            return Err(BookingError::ItemNotFound(item));
        }
        Ok(self.comments.find_by_item(item).await?)
    }
}
