//! Booking entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use lendhub_core::types::{BookingId, ItemId, UserId};

use super::status::BookingStatus;

/// A booking request for an item over a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Unique booking identifier, assigned by storage on creation.
    pub id: BookingId,
    /// Start of the requested rental window.
    pub start_at: DateTime<Utc>,
    /// End of the requested rental window. Always after `start_at`.
    pub end_at: DateTime<Utc>,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// The booked item.
    pub item_id: ItemId,
    /// Owner of the booked item, denormalized for authorization checks.
    pub owner_id: UserId,
    /// The user who submitted the request.
    pub booker_id: UserId,
}

impl Booking {
    /// Whether `now` falls inside the rental window, boundaries included.
    pub fn is_current_at(&self, now: DateTime<Utc>) -> bool {
        self.start_at <= now && now <= self.end_at
    }

    /// Whether the rental window ended strictly before `now`.
    pub fn is_past_at(&self, now: DateTime<Utc>) -> bool {
        self.end_at < now
    }

    /// Whether the rental window starts strictly after `now`.
    pub fn is_future_at(&self, now: DateTime<Utc>) -> bool {
        self.start_at > now
    }
}

/// Data required to persist a new booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBooking {
    /// Start of the rental window.
    pub start_at: DateTime<Utc>,
    /// End of the rental window.
    pub end_at: DateTime<Utc>,
    /// Initial status.
    pub status: BookingStatus,
    /// The booked item.
    pub item_id: ItemId,
    /// Owner of the booked item.
    pub owner_id: UserId,
    /// The requesting user.
    pub booker_id: UserId,
}

/// Minimal booking projection attached to item views.
///
/// Item annotation never leaks full booking detail; only the booking id
/// and the booker id are exposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingSummary {
    /// The booking id.
    pub id: BookingId,
    /// The user who made the booking.
    pub booker_id: UserId,
}

impl From<&Booking> for BookingSummary {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            booker_id: booking.booker_id,
        }
    }
}
