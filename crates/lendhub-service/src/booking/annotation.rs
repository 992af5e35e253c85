//! Last/next booking annotation for item views.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use lendhub_core::types::ItemId;
use lendhub_entity::booking::{BookingStore, BookingSummary};

use crate::BookingResult;

/// The booking annotations attached to an item view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ItemBookings {
    /// The most recently ended booking, if any.
    pub last: Option<BookingSummary>,
    /// The soonest upcoming booking, if any.
    pub next: Option<BookingSummary>,
}

/// Derives the "last completed" and "next upcoming" booking for an item.
///
/// Only the [`BookingSummary`] projection (booking id, booker id) leaves
/// this service; item views never see full booking detail.
#[derive(Clone)]
pub struct ItemAnnotationService {
    /// Booking storage.
    bookings: Arc<dyn BookingStore>,
}

impl ItemAnnotationService {
    /// Creates a new annotation service.
    pub fn new(bookings: Arc<dyn BookingStore>) -> Self {
        Self { bookings }
    }

    /// Compute the last and next booking of `item` relative to `now`.
    ///
    /// `last` is the booking with the greatest `end_at` strictly before
    /// `now` (ties to the highest id); `next` has the smallest `start_at`
    /// strictly after `now` (ties to the lowest id). Either side may be
    /// absent.
    pub async fn annotate(&self, item: ItemId, now: DateTime<Utc>) -> BookingResult<ItemBookings> {
        let last = self.bookings.find_last_for_item(item, now).await?;
        let next = self.bookings.find_next_for_item(item, now).await?;

        Ok(ItemBookings {
            last: last.as_ref().map(BookingSummary::from),
            next: next.as_ref().map(BookingSummary::from),
        })
    }
}
