//! Booking domain errors.

use thiserror::Error;

use lendhub_core::error::{AppError, ErrorKind};
use lendhub_core::types::{BookingId, ItemId, UserId};

/// Errors raised by the booking lifecycle, authorization gate, and
/// temporal classification.
///
/// Every variant is a per-request outcome; nothing here is fatal to the
/// process. Errors are raised at the point of detection and propagate
/// unmodified to the caller boundary (no retries).
#[derive(Debug, Error)]
pub enum BookingError {
    /// No user with the given id exists.
    #[error("user {0} not found")]
    UserNotFound(UserId),

    /// No item with the given id exists.
    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    /// No booking with the given id exists.
    #[error("booking {0} not found")]
    BookingNotFound(BookingId),

    /// The acting user has no relationship to the booking that permits
    /// the attempted operation. Surfaced to callers as not-found, never
    /// as forbidden, so booking existence is not leaked.
    #[error("booking {booking} is not visible to user {user}")]
    NotAuthorized {
        /// The booking being accessed.
        booking: BookingId,
        /// The acting user.
        user: UserId,
    },

    /// The requested range has `end <= start`.
    #[error("booking end must be after start")]
    InvalidRange,

    /// An owner attempted to book their own item.
    #[error("owner of item {item} cannot book their own item")]
    SelfBooking {
        /// The targeted item.
        item: ItemId,
    },

    /// The item is not currently marked available.
    #[error("item {item} is not available for booking")]
    ItemUnavailable {
        /// The targeted item.
        item: ItemId,
    },

    /// The booking was already approved; re-deciding is rejected.
    #[error("booking {booking} has already been approved")]
    AlreadyDecided {
        /// The booking in question.
        booking: BookingId,
    },

    /// No approve/reject decision was supplied.
    #[error("no decision supplied for booking approval")]
    MissingDecision,

    /// The state string matched no known query filter.
    #[error("Unknown state: {0}")]
    UnknownFilter(String),

    /// Paging parameters violate `from >= 0 && size > 0`.
    #[error("invalid paging parameters: from={from}, size={size}")]
    InvalidPage {
        /// Requested offset.
        from: i64,
        /// Requested page size.
        size: i64,
    },

    /// An owner-scoped `ALL` query matched no bookings at all.
    #[error("user {owner} has no items with bookings")]
    NoItems {
        /// The queried owner.
        owner: UserId,
    },

    /// A comment was attempted without a completed approved booking.
    #[error("user {user} has never completed a rental of item {item}")]
    NoCompletedBooking {
        /// The would-be commenter.
        user: UserId,
        /// The commented item.
        item: ItemId,
    },

    /// An underlying storage failure.
    #[error(transparent)]
    Storage(#[from] AppError),
}

impl BookingError {
    /// The [`ErrorKind`] this error surfaces as at the application boundary.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::UserNotFound(_)
            | Self::ItemNotFound(_)
            | Self::BookingNotFound(_)
            | Self::NotAuthorized { .. }
            | Self::NoItems { .. } => ErrorKind::NotFound,
            Self::InvalidRange
            | Self::SelfBooking { .. }
            | Self::ItemUnavailable { .. }
            | Self::AlreadyDecided { .. }
            | Self::MissingDecision
            | Self::UnknownFilter(_)
            | Self::InvalidPage { .. }
            | Self::NoCompletedBooking { .. } => ErrorKind::Validation,
            Self::Storage(err) => err.kind,
        }
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Storage(inner) => inner,
            other => {
                let kind = other.kind();
                AppError::with_source(kind, other.to_string(), other)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_authorized_surfaces_as_not_found() {
        let err = BookingError::NotAuthorized {
            booking: BookingId::new(1),
            user: UserId::new(9),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        let app: AppError = err.into();
        assert_eq!(app.kind, ErrorKind::NotFound);
    }

    #[test]
    fn test_business_rule_errors_are_validation() {
        assert_eq!(BookingError::InvalidRange.kind(), ErrorKind::Validation);
        assert_eq!(
            BookingError::SelfBooking { item: ItemId::new(2) }.kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            BookingError::UnknownFilter("error-state".into()).kind(),
            ErrorKind::Validation
        );
    }

    #[test]
    fn test_storage_kind_passes_through() {
        let err = BookingError::Storage(AppError::database("connection reset"));
        assert_eq!(err.kind(), ErrorKind::Database);
    }
}
