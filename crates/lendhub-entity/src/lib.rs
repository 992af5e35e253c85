//! # lendhub-entity
//!
//! Domain entity models for LendHub. Every struct in this crate represents
//! a database table row or a domain value object. All entities derive
//! `Debug`, `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.
//!
//! The storage traits ([`booking::BookingStore`], [`user::UserDirectory`],
//! [`item::ItemDirectory`], [`comment::CommentStore`]) also live here so
//! that the service layer depends on abstractions rather than on a
//! concrete database crate.

pub mod booking;
pub mod comment;
pub mod item;
pub mod user;
