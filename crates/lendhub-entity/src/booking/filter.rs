//! Query-time booking filters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::BookingError;
use super::model::Booking;
use super::status::BookingStatus;

/// A query-time classification request for booking listings.
///
/// Filters are never persisted on a booking. `Waiting` and `Rejected`
/// overlap with [`BookingStatus`] by name and select by that exact status;
/// `Cancelled` is intentionally not a filter, and `All`/`Current`/`Past`/
/// `Future` are intentionally not statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingFilter {
    /// Every booking, newest start first.
    All,
    /// Bookings whose window contains the reference instant (inclusive).
    Current,
    /// Bookings that ended before the reference instant.
    Past,
    /// Bookings that start after the reference instant.
    Future,
    /// Bookings persisted in `Waiting` status.
    Waiting,
    /// Bookings persisted in `Rejected` status.
    Rejected,
}

impl BookingFilter {
    /// Parse a state string, matching the uppercase names exactly.
    ///
    /// Anything else is a [`BookingError::UnknownFilter`], reported as a
    /// client error rather than a server fault.
    pub fn parse(state: &str) -> Result<Self, BookingError> {
        match state {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            other => Err(BookingError::UnknownFilter(other.to_string())),
        }
    }

    /// Bind this filter to a reference instant, producing the storage-level
    /// query form.
    pub fn into_query(self, now: DateTime<Utc>) -> BookingQuery {
        match self {
            Self::All => BookingQuery::All,
            Self::Current => BookingQuery::Current(now),
            Self::Past => BookingQuery::Past(now),
            Self::Future => BookingQuery::Future(now),
            Self::Waiting => BookingQuery::Status(BookingStatus::Waiting),
            Self::Rejected => BookingQuery::Status(BookingStatus::Rejected),
        }
    }

    /// Return the filter as its canonical uppercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Current => "CURRENT",
            Self::Past => "PAST",
            Self::Future => "FUTURE",
            Self::Waiting => "WAITING",
            Self::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for BookingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A [`BookingFilter`] bound to a reference instant.
///
/// This is the predicate form handed to storage so that temporal filters
/// are evaluated against one consistent `now` and can be pushed down into
/// SQL instead of filtering loaded rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingQuery {
    /// No predicate.
    All,
    /// `start_at <= now AND now <= end_at`.
    Current(DateTime<Utc>),
    /// `end_at < now`.
    Past(DateTime<Utc>),
    /// `start_at > now`.
    Future(DateTime<Utc>),
    /// `status = $1`.
    Status(BookingStatus),
}

impl BookingQuery {
    /// Evaluate the predicate against a single booking.
    ///
    /// The in-memory store and the pure classifier share this so both
    /// agree with the SQL push-down exactly.
    pub fn matches(&self, booking: &Booking) -> bool {
        match self {
            Self::All => true,
            Self::Current(now) => booking.is_current_at(*now),
            Self::Past(now) => booking.is_past_at(*now),
            Self::Future(now) => booking.is_future_at(*now),
            Self::Status(status) => booking.status == *status,
        }
    }
}
