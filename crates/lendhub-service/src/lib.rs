//! # lendhub-service
//!
//! Business logic service layer for LendHub. Each service orchestrates
//! storage traits to implement application-level use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references to the storage traits, never
//! to concrete repositories.

pub mod booking;
pub mod comment;

pub use booking::{BookingRequest, BookingService, ItemAnnotationService, ItemBookings};
pub use comment::CommentService;

/// Result type for service operations.
pub type BookingResult<T> = Result<T, lendhub_entity::booking::BookingError>;
