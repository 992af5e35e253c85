//! Shared test fixtures: services wired over the in-memory stores.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};

use lendhub_core::types::UserId;
use lendhub_database::memory::{
    InMemoryBookingStore, InMemoryCommentStore, InMemoryItemDirectory, InMemoryUserDirectory,
};
use lendhub_entity::item::Item;
use lendhub_entity::user::User;
use lendhub_service::{BookingService, CommentService, ItemAnnotationService};

/// Fully wired service stack over in-memory storage.
pub struct TestApp {
    pub bookings: Arc<InMemoryBookingStore>,
    pub users: Arc<InMemoryUserDirectory>,
    pub items: Arc<InMemoryItemDirectory>,
    pub comments: Arc<InMemoryCommentStore>,
    pub booking_service: BookingService,
    pub annotation_service: ItemAnnotationService,
    pub comment_service: CommentService,
}

impl TestApp {
    pub fn new() -> Self {
        let bookings = Arc::new(InMemoryBookingStore::new());
        let users = Arc::new(InMemoryUserDirectory::new());
        let items = Arc::new(InMemoryItemDirectory::new());
        let comments = Arc::new(InMemoryCommentStore::new());

        let booking_service = BookingService::new(
            bookings.clone(),
            users.clone(),
            items.clone(),
        );
        let annotation_service = ItemAnnotationService::new(bookings.clone());
        let comment_service = CommentService::new(
            comments.clone(),
            bookings.clone(),
            users.clone(),
            items.clone(),
        );

        Self {
            bookings,
            users,
            items,
            comments,
            booking_service,
            annotation_service,
            comment_service,
        }
    }

    /// Register an owner with one available item.
    pub fn owner_with_item(&self, name: &str) -> (User, Item) {
        let owner = self.users.add(name, &format!("{name}@example.com"));
        let item = self.items.add(owner.id, "cordless drill", true);
        (owner, item)
    }

    /// Register a plain user.
    pub fn user(&self, name: &str) -> UserId {
        self.users.add(name, &format!("{name}@example.com")).id
    }
}

/// A fixed instant for tests that do not depend on the wall clock.
pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// `days` days after the current wall-clock time.
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

/// `days` days before the current wall-clock time.
pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}
