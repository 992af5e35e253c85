//! Authorization gate for booking operations.
//!
//! Decides whether an acting user has the right relationship to a booking
//! (booker or item owner) before a read or mutation is allowed. Identity
//! mismatches surface as [`BookingError::NotAuthorized`], which the error
//! boundary renders as not-found; the create-time rules are business-rule
//! violations and keep their own dedicated errors.

use lendhub_core::types::UserId;
use lendhub_entity::booking::{Booking, BookingError};
use lendhub_entity::item::Item;

/// Permit viewing a booking to its booker or the owner of the booked item.
pub fn ensure_can_view(booking: &Booking, acting: UserId) -> Result<(), BookingError> {
    if booking.booker_id == acting || booking.owner_id == acting {
        Ok(())
    } else {
        Err(BookingError::NotAuthorized {
            booking: booking.id,
            user: acting,
        })
    }
}

/// Permit approving or rejecting a booking to the item owner only.
///
/// The booker cannot decide their own request.
pub fn ensure_can_decide(booking: &Booking, acting: UserId) -> Result<(), BookingError> {
    if booking.owner_id == acting {
        Ok(())
    } else {
        Err(BookingError::NotAuthorized {
            booking: booking.id,
            user: acting,
        })
    }
}

/// Permit creating a booking against an item.
///
/// The item must currently accept bookings and the requester must not be
/// its owner.
pub fn ensure_can_book(item: &Item, requester: UserId) -> Result<(), BookingError> {
    if !item.available {
        return Err(BookingError::ItemUnavailable { item: item.id });
    }
    if item.owner_id == requester {
        return Err(BookingError::SelfBooking { item: item.id });
    }
    Ok(())
}
