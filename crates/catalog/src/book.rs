use serde::{Deserialize, Serialize};
use thiserror::Error;

use bookstore_core::Username;

use crate::reviews::Reviews;

/// A catalog entry. The ISBN is the key it is stored under, not a field.
///
/// # Invariants
/// - At most one review per username.
/// - Reviews keep the order they were first written in.
/// - A (book, user) review moves only `absent -> present` (create),
///   `present -> present` (update) and `present -> absent` (delete).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub author: String,
    pub title: String,
    #[serde(default)]
    reviews: Reviews,
}

/// Whether an upsert created a review or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Created,
    Updated,
}

impl ReviewOutcome {
    pub fn message(self) -> &'static str {
        match self {
            ReviewOutcome::Created => "Review created.",
            ReviewOutcome::Updated => "Review updated.",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReviewError {
    #[error("The provided ISBN does not exist.")]
    UnknownIsbn,

    #[error("The query 'review' must be provided.")]
    MissingText,

    #[error("The user has no review for this resource.")]
    NoReview,
}

impl Book {
    pub fn new(author: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            reviews: Reviews::default(),
        }
    }

    pub fn reviews(&self) -> &Reviews {
        &self.reviews
    }

    pub fn review_by(&self, username: &Username) -> Option<&str> {
        self.reviews.get(username)
    }

    /// Create or overwrite `username`'s review.
    pub fn upsert_review(&mut self, username: Username, text: impl Into<String>) -> ReviewOutcome {
        match self.reviews.insert(username, text.into()) {
            Some(_) => ReviewOutcome::Updated,
            None => ReviewOutcome::Created,
        }
    }

    /// Remove `username`'s review, returning the removed text.
    pub fn remove_review(&mut self, username: &Username) -> Result<String, ReviewError> {
        self.reviews.remove(username).ok_or(ReviewError::NoReview)
    }
}

/// Review text must be present and non-empty.
pub fn require_review_text(raw: Option<String>) -> Result<String, ReviewError> {
    raw.filter(|text| !text.is_empty()).ok_or(ReviewError::MissingText)
}
