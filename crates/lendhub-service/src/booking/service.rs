//! Booking lifecycle service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use lendhub_core::types::{BookingId, ItemId, PageRequest, UserId};
use lendhub_entity::booking::{
    Booking, BookingError, BookingFilter, BookingStatus, BookingStore, CreateBooking,
};
use lendhub_entity::item::ItemDirectory;
use lendhub_entity::user::UserDirectory;

use super::access;
use crate::BookingResult;

/// Request to create a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// The item to book.
    pub item_id: ItemId,
    /// Start of the rental window.
    pub start_at: DateTime<Utc>,
    /// End of the rental window.
    pub end_at: DateTime<Utc>,
}

/// Orchestrates booking creation, the approve/reject transition,
/// retrieval, deletion, and the booker/owner listing queries.
///
/// The state machine is `Waiting -> {Approved, Rejected}`; both outcomes
/// are terminal and nothing resurrects a decided booking.
#[derive(Clone)]
pub struct BookingService {
    /// Booking storage.
    bookings: Arc<dyn BookingStore>,
    /// User directory for existence checks.
    users: Arc<dyn UserDirectory>,
    /// Item directory for ownership and availability checks.
    items: Arc<dyn ItemDirectory>,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        bookings: Arc<dyn BookingStore>,
        users: Arc<dyn UserDirectory>,
        items: Arc<dyn ItemDirectory>,
    ) -> Self {
        Self {
            bookings,
            users,
            items,
        }
    }

    /// Submit a booking request for an item.
    ///
    /// The requester and item must exist, the range must satisfy
    /// `start < end`, the item must be available, and owners cannot book
    /// their own items. The new booking is persisted in `Waiting` status.
    pub async fn create(&self, booker: UserId, request: BookingRequest) -> BookingResult<Booking> {
        if !self.users.exists(booker).await? {
            return Err(BookingError::UserNotFound(booker));
        }
        let item = self
            .items
            .get(request.item_id)
            .await?
            .ok_or(BookingError::ItemNotFound(request.item_id))?;

        if request.start_at >= request.end_at {
            return Err(BookingError::InvalidRange);
        }
        access::ensure_can_book(&item, booker)?;

        let booking = self
            .bookings
            .create(&CreateBooking {
                start_at: request.start_at,
                end_at: request.end_at,
                status: BookingStatus::Waiting,
                item_id: item.id,
                owner_id: item.owner_id,
                booker_id: booker,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            item_id = %booking.item_id,
            booker_id = %booker,
            "Booking created"
        );

        Ok(booking)
    }

    /// Approve or reject a waiting booking.
    ///
    /// Only the item owner may decide. A booking already in `Approved`
    /// status rejects any further decision; a `Rejected` booking is not
    /// guarded the same way and may be re-decided (inherited behavior,
    /// kept until product says otherwise). The transition is applied as a
    /// compare-and-swap on the previously read status, so two concurrent
    /// decisions cannot both land.
    pub async fn approve(
        &self,
        acting: UserId,
        booking_id: BookingId,
        decision: Option<bool>,
    ) -> BookingResult<Booking> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingError::BookingNotFound(booking_id))?;

        access::ensure_can_decide(&booking, acting)?;

        if booking.status == BookingStatus::Approved {
            return Err(BookingError::AlreadyDecided {
                booking: booking_id,
            });
        }
        let approved = decision.ok_or(BookingError::MissingDecision)?;

        let new_status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };

        let updated = self
            .bookings
            .update_status_if(booking_id, booking.status, new_status)
            .await?
            .ok_or(BookingError::AlreadyDecided {
                booking: booking_id,
            })?;

        info!(
            booking_id = %booking_id,
            owner_id = %acting,
            status = %updated.status,
            "Booking decided"
        );

        Ok(updated)
    }

    /// Fetch a booking, visible only to its booker or the item owner.
    pub async fn find_by_id(
        &self,
        booking_id: BookingId,
        acting: UserId,
    ) -> BookingResult<Booking> {
        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or(BookingError::BookingNotFound(booking_id))?;

        access::ensure_can_view(&booking, acting)?;
        Ok(booking)
    }

    /// Hard-delete a booking regardless of status or ownership.
    ///
    /// Administrative operation; the only precondition is existence.
    pub async fn delete_by_id(&self, booking_id: BookingId) -> BookingResult<()> {
        if !self.bookings.exists(booking_id).await? {
            return Err(BookingError::BookingNotFound(booking_id));
        }
        self.bookings.delete(booking_id).await?;

        info!(booking_id = %booking_id, "Booking deleted");
        Ok(())
    }

    /// Page of the acting user's own bookings matching `state`.
    pub async fn find_all_for_booker(
        &self,
        acting: UserId,
        state: &str,
        from: i64,
        size: i64,
    ) -> BookingResult<Vec<Booking>> {
        let (filter, page) = self.validate_listing(acting, state, from, size).await?;
        let query = filter.into_query(Utc::now());
        Ok(self.bookings.find_by_booker(acting, &query, &page).await?)
    }

    /// Page of bookings across all items owned by the acting user.
    ///
    /// For the `ALL` filter an empty result means the user has no items
    /// with bookings at all and is an error; any narrower filter may
    /// legitimately come back empty.
    pub async fn find_all_for_owner(
        &self,
        acting: UserId,
        state: &str,
        from: i64,
        size: i64,
    ) -> BookingResult<Vec<Booking>> {
        let (filter, page) = self.validate_listing(acting, state, from, size).await?;
        let query = filter.into_query(Utc::now());
        let bookings = self.bookings.find_by_owner(acting, &query, &page).await?;

        if filter == BookingFilter::All && bookings.is_empty() {
            return Err(BookingError::NoItems { owner: acting });
        }
        Ok(bookings)
    }

    /// Shared validation for the two listing queries: the requester must
    /// exist, paging must satisfy `from >= 0 && size > 0`, and the state
    /// string must name a known filter.
    async fn validate_listing(
        &self,
        acting: UserId,
        state: &str,
        from: i64,
        size: i64,
    ) -> BookingResult<(BookingFilter, PageRequest)> {
        if !self.users.exists(acting).await? {
            return Err(BookingError::UserNotFound(acting));
        }
        let page = PageRequest::new(from, size);
        if !page.is_valid() {
            return Err(BookingError::InvalidPage { from, size });
        }
        let filter = BookingFilter::parse(state)?;
        Ok((filter, page))
    }
}
