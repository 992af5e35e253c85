//! In-memory booking store.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;

use lendhub_core::result::AppResult;
use lendhub_core::types::{BookingId, ItemId, PageRequest, UserId};
use lendhub_entity::booking::{
    Booking, BookingQuery, BookingStatus, BookingStore, CreateBooking, classify,
};

/// Booking storage backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    bookings: DashMap<BookingId, Booking>,
    next_id: AtomicI64,
}

impl InMemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bookings.
    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    /// Whether the store holds no bookings.
    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    fn snapshot_where(&self, predicate: impl Fn(&Booking) -> bool) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn page_of(mut selected: Vec<Booking>, query: &BookingQuery, page: &PageRequest) -> Vec<Booking> {
        selected.retain(|booking| query.matches(booking));
        selected.sort_by(|a, b| b.start_at.cmp(&a.start_at));
        selected
            .into_iter()
            .skip(page.offset().max(0) as usize)
            .take(page.limit().max(0) as usize)
            .collect()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        let id = BookingId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let booking = Booking {
            id,
            start_at: data.start_at,
            end_at: data.end_at,
            status: data.status,
            item_id: data.item_id,
            owner_id: data.owner_id,
            booker_id: data.booker_id,
        };
        self.bookings.insert(id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: BookingId) -> AppResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|entry| entry.value().clone()))
    }

    async fn exists(&self, id: BookingId) -> AppResult<bool> {
        Ok(self.bookings.contains_key(&id))
    }

    async fn delete(&self, id: BookingId) -> AppResult<bool> {
        Ok(self.bookings.remove(&id).is_some())
    }

    async fn update_status_if(
        &self,
        id: BookingId,
        expected: BookingStatus,
        new_status: BookingStatus,
    ) -> AppResult<Option<Booking>> {
        // get_mut holds the shard lock, making the check-and-set atomic.
        match self.bookings.get_mut(&id) {
            Some(mut entry) if entry.status == expected => {
                entry.status = new_status;
                Ok(Some(entry.value().clone()))
            }
            _ => Ok(None),
        }
    }

    async fn find_by_booker(
        &self,
        booker: UserId,
        query: &BookingQuery,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>> {
        let selected = self.snapshot_where(|b| b.booker_id == booker);
        Ok(Self::page_of(selected, query, page))
    }

    async fn find_by_owner(
        &self,
        owner: UserId,
        query: &BookingQuery,
        page: &PageRequest,
    ) -> AppResult<Vec<Booking>> {
        let selected = self.snapshot_where(|b| b.owner_id == owner);
        Ok(Self::page_of(selected, query, page))
    }

    async fn find_last_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>> {
        let selected = self.snapshot_where(|b| b.item_id == item);
        Ok(classify::last_booking(&selected, now).cloned())
    }

    async fn find_next_for_item(
        &self,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> AppResult<Option<Booking>> {
        let selected = self.snapshot_where(|b| b.item_id == item);
        Ok(classify::next_booking(&selected, now).cloned())
    }

    async fn has_completed_booking(
        &self,
        booker: UserId,
        item: ItemId,
        now: DateTime<Utc>,
    ) -> AppResult<bool> {
        Ok(self.bookings.iter().any(|entry| {
            let b = entry.value();
            b.booker_id == booker
                && b.item_id == item
                && b.status == BookingStatus::Approved
                && b.end_at < now
        }))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use lendhub_entity::booking::BookingFilter;

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn request(start: DateTime<Utc>, end: DateTime<Utc>) -> CreateBooking {
        CreateBooking {
            start_at: start,
            end_at: end,
            status: BookingStatus::Waiting,
            item_id: ItemId::new(1),
            owner_id: UserId::new(10),
            booker_id: UserId::new(20),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = InMemoryBookingStore::new();
        let first = store.create(&request(at(2024, 6, 1), at(2024, 6, 5))).await.unwrap();
        let second = store.create(&request(at(2024, 7, 1), at(2024, 7, 5))).await.unwrap();
        assert_eq!(first.id, BookingId::new(1));
        assert_eq!(second.id, BookingId::new(2));
    }

    #[tokio::test]
    async fn test_update_status_if_applies_only_on_match() {
        let store = InMemoryBookingStore::new();
        let booking = store.create(&request(at(2024, 6, 1), at(2024, 6, 5))).await.unwrap();

        let approved = store
            .update_status_if(booking.id, BookingStatus::Waiting, BookingStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.unwrap().status, BookingStatus::Approved);

        // The expected status no longer matches; the swap must not apply.
        let second = store
            .update_status_if(booking.id, BookingStatus::Waiting, BookingStatus::Rejected)
            .await
            .unwrap();
        assert!(second.is_none());
        let stored = store.find_by_id(booking.id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookingStatus::Approved);
    }

    #[tokio::test]
    async fn test_find_by_booker_orders_and_pages() {
        let store = InMemoryBookingStore::new();
        for month in 1..=5 {
            store
                .create(&request(at(2024, month, 1), at(2024, month, 5)))
                .await
                .unwrap();
        }

        let now = at(2024, 6, 15);
        let query = BookingFilter::All.into_query(now);
        let first_page = store
            .find_by_booker(UserId::new(20), &query, &PageRequest::new(0, 2))
            .await
            .unwrap();
        let starts: Vec<DateTime<Utc>> = first_page.iter().map(|b| b.start_at).collect();
        assert_eq!(starts, vec![at(2024, 5, 1), at(2024, 4, 1)]);

        let second_page = store
            .find_by_booker(UserId::new(20), &query, &PageRequest::new(2, 2))
            .await
            .unwrap();
        assert_eq!(second_page[0].start_at, at(2024, 3, 1));
    }

    #[tokio::test]
    async fn test_temporal_queries_match_classifier() {
        let store = InMemoryBookingStore::new();
        store.create(&request(at(2024, 1, 1), at(2024, 1, 5))).await.unwrap();
        store.create(&request(at(2024, 6, 10), at(2024, 6, 20))).await.unwrap();
        store.create(&request(at(2024, 9, 1), at(2024, 9, 5))).await.unwrap();

        let now = at(2024, 6, 15);
        let page = PageRequest::new(0, 10);
        for filter in [BookingFilter::Past, BookingFilter::Current, BookingFilter::Future] {
            let rows = store
                .find_by_booker(UserId::new(20), &filter.into_query(now), &page)
                .await
                .unwrap();
            assert_eq!(rows.len(), 1, "filter {filter}");
        }
    }
}
