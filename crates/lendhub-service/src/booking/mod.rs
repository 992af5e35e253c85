//! Booking lifecycle, authorization gate, and item annotation.

pub mod access;
pub mod annotation;
pub mod service;

pub use annotation::{ItemAnnotationService, ItemBookings};
pub use service::{BookingRequest, BookingService};
