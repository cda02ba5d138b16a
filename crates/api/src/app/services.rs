//! Service wiring: stores, token issuing, and the operations routes call.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use chrono::Utc;

use bookstore_auth::{Credentials, RegistrationError, TokenIssuer, User, verify_login};
use bookstore_catalog::{Book, ReviewError, ReviewOutcome, require_review_text};
use bookstore_core::{DomainError, Isbn, Username};
use bookstore_infra::{BookStore, UserStore};

use crate::app::errors::ApiError;

pub struct AppServices {
    users: Arc<dyn UserStore>,
    books: Arc<dyn BookStore>,
    tokens: Arc<dyn TokenIssuer>,
    /// Serializes review read-modify-write cycles.
    review_writes: Mutex<()>,
    started_at: Instant,
}

impl AppServices {
    pub fn new(
        users: Arc<dyn UserStore>,
        books: Arc<dyn BookStore>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            books,
            tokens,
            review_writes: Mutex::new(()),
            started_at: Instant::now(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    // -------------------------
    // Users
    // -------------------------

    pub fn register(&self, credentials: Credentials) -> Result<Username, ApiError> {
        let user = credentials.into_registration()?;
        let username = user.username.clone();

        match self.users.insert(user) {
            Ok(()) => {
                tracing::info!(%username, "user registered");
                Ok(username)
            }
            Err(DomainError::Conflict(_)) => Err(RegistrationError::AlreadyExists.into()),
            Err(e) => Err(ApiError::internal(e.to_string())),
        }
    }

    /// Check credentials and mint an access token for the user.
    pub fn login(&self, credentials: Credentials) -> Result<(Username, String), ApiError> {
        let (username, password) = credentials.into_login()?;
        let stored = self.users.get(&username);

        let username = verify_login(stored.as_ref(), &password).inspect_err(|_| {
            tracing::info!(%username, "login rejected");
        })?;

        let token = self
            .tokens
            .issue(&username, Utc::now())
            .map_err(|e| ApiError::internal(e.to_string()))?;

        tracing::info!(%username, "user logged in");
        Ok((username, token))
    }

    pub fn users(&self) -> Vec<User> {
        self.users.list()
    }

    // -------------------------
    // Catalog
    // -------------------------

    pub fn catalog(&self) -> Vec<(Isbn, Book)> {
        self.books.list()
    }

    pub fn book(&self, isbn: &str) -> Option<Book> {
        let isbn = Isbn::parse(isbn).ok()?;
        self.books.get(&isbn)
    }

    pub fn first_by_author(&self, author: &str) -> Option<Book> {
        self.first_matching(|book| book.author == author)
    }

    pub fn first_by_title(&self, title: &str) -> Option<Book> {
        self.first_matching(|book| book.title == title)
    }

    fn first_matching(&self, predicate: impl Fn(&Book) -> bool) -> Option<Book> {
        self.books
            .list()
            .into_iter()
            .map(|(_, book)| book)
            .find(|book| predicate(book))
    }

    // -------------------------
    // Reviews
    // -------------------------

    pub fn upsert_review(
        &self,
        isbn: &str,
        author: &Username,
        text: Option<String>,
    ) -> Result<ReviewOutcome, ApiError> {
        let _guard = self
            .review_writes
            .lock()
            .map_err(|_| ApiError::internal("review lock poisoned"))?;

        let (isbn, mut book) = self.existing_book(isbn)?;
        let text = require_review_text(text)?;

        let outcome = book.upsert_review(author.clone(), text);
        self.books
            .put(isbn.clone(), book)
            .map_err(|e| ApiError::internal(e.to_string()))?;

        tracing::info!(%isbn, username = %author, ?outcome, "review saved");
        Ok(outcome)
    }

    /// Remove the author's review and return its text.
    pub fn delete_review(&self, isbn: &str, author: &Username) -> Result<String, ApiError> {
        let _guard = self
            .review_writes
            .lock()
            .map_err(|_| ApiError::internal("review lock poisoned"))?;

        let (isbn, mut book) = self.existing_book(isbn)?;
        let removed = book.remove_review(author)?;
        self.books
            .put(isbn.clone(), book)
            .map_err(|e| ApiError::internal(e.to_string()))?;

        tracing::info!(%isbn, username = %author, "review deleted");
        Ok(removed)
    }

    fn existing_book(&self, isbn: &str) -> Result<(Isbn, Book), ApiError> {
        let isbn = Isbn::parse(isbn).map_err(|_| ReviewError::UnknownIsbn)?;
        let book = self.books.get(&isbn).ok_or(ReviewError::UnknownIsbn)?;
        Ok((isbn, book))
    }
}
