//! Pure temporal classification of booking collections.
//!
//! These functions own the CURRENT/PAST/FUTURE bucketing semantics and the
//! last/next selection rules. They operate on borrowed slices and touch no
//! storage, so the semantics are testable in isolation; the in-memory
//! store and the SQL push-down in `lendhub-database` mirror them.

use chrono::{DateTime, Utc};

use super::filter::BookingFilter;
use super::model::Booking;

/// Select and order the bookings matching `filter` at the instant `now`.
///
/// Result ordering is always by `start_at` descending. `Current` uses an
/// inclusive window on both boundaries: a booking exactly at its start or
/// end instant counts as current, so `Past` and `Future` never overlap
/// with `Current` at a boundary.
pub fn classify(bookings: &[Booking], now: DateTime<Utc>, filter: BookingFilter) -> Vec<Booking> {
    let query = filter.into_query(now);
    let mut selected: Vec<Booking> = bookings
        .iter()
        .filter(|booking| query.matches(booking))
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.start_at.cmp(&a.start_at));
    selected
}

/// The most recently ended booking with `end_at < now`.
///
/// Chosen by maximum `end_at`; ties break to the highest booking id for
/// determinism.
pub fn last_booking(bookings: &[Booking], now: DateTime<Utc>) -> Option<&Booking> {
    bookings
        .iter()
        .filter(|booking| booking.is_past_at(now))
        .max_by_key(|booking| (booking.end_at, booking.id))
}

/// The soonest booking with `start_at > now`.
///
/// Chosen by minimum `start_at`; ties break to the lowest booking id.
pub fn next_booking(bookings: &[Booking], now: DateTime<Utc>) -> Option<&Booking> {
    bookings
        .iter()
        .filter(|booking| booking.is_future_at(now))
        .min_by_key(|booking| (booking.start_at, booking.id))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use lendhub_core::types::{BookingId, ItemId, UserId};

    use super::super::status::BookingStatus;
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn booking(
        id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        status: BookingStatus,
    ) -> Booking {
        Booking {
            id: BookingId::new(id),
            start_at: start,
            end_at: end,
            status,
            item_id: ItemId::new(1),
            owner_id: UserId::new(10),
            booker_id: UserId::new(20),
        }
    }

    #[test]
    fn test_current_window_is_inclusive() {
        let now = at(2024, 6, 1, 12);
        let b = booking(1, now, at(2024, 6, 5, 12), BookingStatus::Approved);
        assert_eq!(classify(&[b.clone()], now, BookingFilter::Current).len(), 1);

        let ending_now = booking(2, at(2024, 5, 28, 12), now, BookingStatus::Approved);
        assert_eq!(classify(&[ending_now], now, BookingFilter::Current).len(), 1);
    }

    #[test]
    fn test_past_current_future_partition() {
        let now = at(2024, 6, 1, 12);
        let past = booking(1, at(2024, 1, 1, 0), at(2024, 1, 5, 0), BookingStatus::Approved);
        let current = booking(2, at(2024, 5, 30, 0), at(2024, 6, 3, 0), BookingStatus::Approved);
        let future = booking(3, at(2024, 7, 1, 0), at(2024, 7, 5, 0), BookingStatus::Waiting);
        let all = [past, current, future];

        // Each booking lands in exactly one temporal bucket.
        for b in &all {
            let buckets = [BookingFilter::Past, BookingFilter::Current, BookingFilter::Future]
                .into_iter()
                .filter(|f| !classify(std::slice::from_ref(b), now, *f).is_empty())
                .count();
            assert_eq!(buckets, 1, "booking {} not in exactly one bucket", b.id);
        }
    }

    #[test]
    fn test_boundary_booking_is_current_not_past_or_future() {
        let now = at(2024, 6, 1, 12);
        let starting_now = booking(1, now, at(2024, 6, 2, 12), BookingStatus::Approved);
        assert!(classify(std::slice::from_ref(&starting_now), now, BookingFilter::Past).is_empty());
        assert!(
            classify(std::slice::from_ref(&starting_now), now, BookingFilter::Future).is_empty()
        );
        assert_eq!(classify(&[starting_now], now, BookingFilter::Current).len(), 1);
    }

    #[test]
    fn test_status_filters_select_by_exact_status() {
        let now = at(2024, 6, 1, 12);
        let waiting = booking(1, at(2024, 7, 1, 0), at(2024, 7, 2, 0), BookingStatus::Waiting);
        let rejected = booking(2, at(2024, 7, 3, 0), at(2024, 7, 4, 0), BookingStatus::Rejected);
        let approved = booking(3, at(2024, 7, 5, 0), at(2024, 7, 6, 0), BookingStatus::Approved);
        let all = [waiting, rejected, approved];

        let w = classify(&all, now, BookingFilter::Waiting);
        assert_eq!(w.len(), 1);
        assert_eq!(w[0].id, BookingId::new(1));

        let r = classify(&all, now, BookingFilter::Rejected);
        assert_eq!(r.len(), 1);
        assert_eq!(r[0].id, BookingId::new(2));
    }

    #[test]
    fn test_all_orders_by_start_descending() {
        let now = at(2024, 6, 1, 12);
        let early = booking(1, at(2024, 1, 1, 0), at(2024, 1, 2, 0), BookingStatus::Approved);
        let late = booking(2, at(2024, 8, 1, 0), at(2024, 8, 2, 0), BookingStatus::Waiting);
        let mid = booking(3, at(2024, 5, 1, 0), at(2024, 5, 2, 0), BookingStatus::Rejected);

        let ordered = classify(&[early, late, mid], now, BookingFilter::All);
        let ids: Vec<i64> = ordered.iter().map(|b| b.id.into_inner()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_last_and_next_booking() {
        let now = at(2024, 6, 1, 0);
        let ended = booking(1, at(2023, 12, 25, 0), at(2024, 1, 1, 0), BookingStatus::Approved);
        let upcoming = booking(2, at(2025, 1, 1, 0), at(2025, 1, 8, 0), BookingStatus::Waiting);
        let all = [ended, upcoming];

        assert_eq!(last_booking(&all, now).map(|b| b.id), Some(BookingId::new(1)));
        assert_eq!(next_booking(&all, now).map(|b| b.id), Some(BookingId::new(2)));
    }

    #[test]
    fn test_last_booking_tie_breaks_to_highest_id() {
        let now = at(2024, 6, 1, 0);
        let end = at(2024, 1, 1, 0);
        let a = booking(1, at(2023, 12, 1, 0), end, BookingStatus::Approved);
        let b = booking(2, at(2023, 12, 15, 0), end, BookingStatus::Approved);

        assert_eq!(last_booking(&[a, b], now).map(|x| x.id), Some(BookingId::new(2)));
    }

    #[test]
    fn test_next_booking_tie_breaks_to_lowest_id() {
        let now = at(2024, 6, 1, 0);
        let start = at(2024, 7, 1, 0);
        let a = booking(5, start, at(2024, 7, 8, 0), BookingStatus::Waiting);
        let b = booking(3, start, at(2024, 7, 9, 0), BookingStatus::Waiting);

        assert_eq!(next_booking(&[a, b], now).map(|x| x.id), Some(BookingId::new(3)));
    }

    #[test]
    fn test_absent_when_no_candidates() {
        let now = at(2024, 6, 1, 0);
        let current = booking(1, at(2024, 5, 1, 0), at(2024, 7, 1, 0), BookingStatus::Approved);
        assert!(last_booking(std::slice::from_ref(&current), now).is_none());
        assert!(next_booking(std::slice::from_ref(&current), now).is_none());
    }
}
