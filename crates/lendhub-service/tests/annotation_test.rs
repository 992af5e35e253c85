//! Integration tests for item booking annotations.

mod helpers;

use helpers::{TestApp, at};

use lendhub_core::types::{ItemId, UserId};
use lendhub_entity::booking::{BookingStatus, BookingStore, CreateBooking};

async fn seed_booking(
    app: &TestApp,
    item: ItemId,
    start: chrono::DateTime<chrono::Utc>,
    end: chrono::DateTime<chrono::Utc>,
) -> lendhub_entity::booking::Booking {
    app.bookings
        .create(&CreateBooking {
            start_at: start,
            end_at: end,
            status: BookingStatus::Approved,
            item_id: item,
            owner_id: UserId::new(10),
            booker_id: UserId::new(20),
        })
        .await
        .unwrap()
}

#[tokio::test]
async fn test_last_and_next_around_reference_time() {
    let app = TestApp::new();
    let item = ItemId::new(1);

    let ended = seed_booking(&app, item, at(2023, 12, 25, 0), at(2024, 1, 1, 0)).await;
    let upcoming = seed_booking(&app, item, at(2025, 1, 1, 0), at(2025, 1, 8, 0)).await;

    let annotations = app
        .annotation_service
        .annotate(item, at(2024, 6, 1, 0))
        .await
        .unwrap();

    let last = annotations.last.expect("last booking expected");
    assert_eq!(last.id, ended.id);
    assert_eq!(last.booker_id, ended.booker_id);

    let next = annotations.next.expect("next booking expected");
    assert_eq!(next.id, upcoming.id);
    assert_eq!(next.booker_id, upcoming.booker_id);
}

#[tokio::test]
async fn test_absent_sides_stay_absent() {
    let app = TestApp::new();
    let item = ItemId::new(1);

    // Only an upcoming booking: no last side.
    seed_booking(&app, item, at(2025, 1, 1, 0), at(2025, 1, 8, 0)).await;

    let annotations = app
        .annotation_service
        .annotate(item, at(2024, 6, 1, 0))
        .await
        .unwrap();
    assert!(annotations.last.is_none());
    assert!(annotations.next.is_some());

    // An item with no bookings at all annotates to nothing.
    let bare = app
        .annotation_service
        .annotate(ItemId::new(99), at(2024, 6, 1, 0))
        .await
        .unwrap();
    assert!(bare.last.is_none());
    assert!(bare.next.is_none());
}

#[tokio::test]
async fn test_running_booking_is_neither_last_nor_next() {
    let app = TestApp::new();
    let item = ItemId::new(1);

    seed_booking(&app, item, at(2024, 5, 1, 0), at(2024, 7, 1, 0)).await;

    let annotations = app
        .annotation_service
        .annotate(item, at(2024, 6, 1, 0))
        .await
        .unwrap();
    assert!(annotations.last.is_none());
    assert!(annotations.next.is_none());
}

#[tokio::test]
async fn test_picks_closest_on_both_sides() {
    let app = TestApp::new();
    let item = ItemId::new(1);

    seed_booking(&app, item, at(2023, 1, 1, 0), at(2023, 1, 8, 0)).await;
    let recent = seed_booking(&app, item, at(2024, 3, 1, 0), at(2024, 3, 8, 0)).await;
    let soon = seed_booking(&app, item, at(2024, 9, 1, 0), at(2024, 9, 8, 0)).await;
    seed_booking(&app, item, at(2025, 6, 1, 0), at(2025, 6, 8, 0)).await;

    let annotations = app
        .annotation_service
        .annotate(item, at(2024, 6, 1, 0))
        .await
        .unwrap();
    assert_eq!(annotations.last.unwrap().id, recent.id);
    assert_eq!(annotations.next.unwrap().id, soon.id);
}
