//! Concrete PostgreSQL repository implementations.

pub mod booking;
pub mod comment;
pub mod item;
pub mod user;

pub use booking::BookingRepository;
pub use comment::CommentRepository;
pub use item::ItemRepository;
pub use user::UserRepository;
