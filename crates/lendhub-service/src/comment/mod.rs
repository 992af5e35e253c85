//! Comments after completed bookings.

pub mod service;

pub use service::CommentService;
