//! `bookstore-catalog`: books and the review rules.
//!
//! Pure domain logic: no IO, no HTTP, no storage.

pub mod book;
pub mod reviews;
pub mod seed;

pub use book::{Book, ReviewError, ReviewOutcome, require_review_text};
pub use reviews::Reviews;
pub use seed::seed_catalog;
