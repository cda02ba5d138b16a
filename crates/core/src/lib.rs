//! `bookstore-core`: shared domain building blocks.
//!
//! Identifiers and the domain error model. No IO, no HTTP, no storage.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{Isbn, Username};
