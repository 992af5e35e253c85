//! Storage abstraction for bookings.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use lendhub_core::result::AppResult;
use lendhub_core::types::{BookingId, ItemId, PageRequest, UserId};

use super::filter::BookingQuery;
use super::model::{Booking, CreateBooking};
use super::status::BookingStatus;

/// Persistence operations required by the booking services.
///
/// Implemented by the PostgreSQL repository for production and by an
/// in-memory store for tests. Query methods push filtering and the
/// `start_at DESC` ordering down to the implementation; callers never
/// re-filter loaded rows.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persist a new booking and return it with its assigned id.
    async fn create(&self, data: &CreateBooking) -> AppResult<Booking>;

    /// Find a booking by id.
    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>>;

    /// Whether a booking with the given id exists.
    async fn exists(&self, id: BookingId) -> AppResult<bool>;

    /// Hard-delete a booking. Returns `true` if a row was removed.
    async fn delete(&self, id: BookingId) -> AppResult<bool>;

    /// Conditionally set the status of a booking.
    ///
    /// The update only applies while the stored status still equals
    /// `expected` (a compare-and-swap), closing the check-then-act race
    /// between concurrent decisions. Returns the updated booking, or
    /// `None` if the booking is missing or the status changed underneath.
    async fn update_status_if(
        &self,
        id: BookingId,
        expected: BookingStatus,
        new_status: BookingStatus,
    ) -> AppResult<Option<Booking>>;

    /// Page of bookings made by `booker` matching `query`, ordered by
    /// `start_at` descending.
    async fn find_by_booker(
        &self,
        booker: UserId,
        query: &BookingQuery,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>>;

    /// Page of bookings across all items owned by `owner` matching
    /// `query`, ordered by `start_at` descending.
    async fn find_by_owner(
        &self,
        owner: UserId,
        query: &BookingQuery,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>>;

    /// The most recently ended booking of `item` strictly before `now`
    /// (maximum `end_at`, ties to the highest id).
    async fn find_last_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>>;

    /// The soonest booking of `item` starting strictly after `now`
    /// (minimum `start_at`, ties to the lowest id).
    async fn find_next_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>>;

    /// Whether `booker` has an approved booking of `item` that ended
    /// before `now`. Gates comment creation.
    async fn has_completed_booking(
        &self,
        booker: UserId,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> AppResult<bool>;
}
