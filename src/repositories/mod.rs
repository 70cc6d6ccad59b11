//! Repository layer for database operations.
//!
//! Keeps SQL out of the service layer; services only see typed records and
//! `StoreError`.

pub mod user_repository;

pub use user_repository::UserRepository;
