//! Booking entity, status machine, temporal classification, and storage trait.

pub mod classify;
pub mod error;
pub mod filter;
pub mod model;
pub mod status;
pub mod store;

pub use classify::{classify, last_booking, next_booking};
pub use error::BookingError;
pub use filter::{BookingFilter, BookingQuery};
pub use model::{Booking, BookingSummary, CreateBooking};
pub use status::BookingStatus;
pub use store::BookingStore;
