//! In-memory store implementations.
//!
//! These back the service tests and local development without a running
//! PostgreSQL instance. They implement the same traits as the SQL
//! repositories and must agree with them observably; the booking store
//! reuses the pure classification helpers from `lendhub-entity` so the
//! predicate semantics cannot drift from the SQL push-down.

pub mod booking;
pub mod comment;
pub mod directory;

pub use booking::InMemoryBookingStore;
pub use comment::InMemoryCommentStore;
pub use directory::{InMemoryItemDirectory, InMemoryUserDirectory};
