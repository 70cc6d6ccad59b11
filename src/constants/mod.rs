//! Application constants module.
//!
//! Centralizes the strings and limits shared by handlers, services and the
//! data access layer.

pub mod errors;
pub mod messages;
pub mod pagination;

pub use errors::*;
pub use messages::*;
pub use pagination::*;
