use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use bookstore_catalog::Book;
use bookstore_core::{DomainError, DomainResult, Isbn};

/// Book repository keyed by ISBN.
pub trait BookStore: Send + Sync {
    fn get(&self, isbn: &Isbn) -> Option<Book>;
    /// Insert or replace. A replaced book keeps its original position.
    fn put(&self, isbn: Isbn, book: Book) -> DomainResult<()>;
    /// All books in insertion order.
    fn list(&self) -> Vec<(Isbn, Book)>;
}

impl<S> BookStore for Arc<S>
where
    S: BookStore + ?Sized,
{
    fn get(&self, isbn: &Isbn) -> Option<Book> {
        (**self).get(isbn)
    }

    fn put(&self, isbn: Isbn, book: Book) -> DomainResult<()> {
        (**self).put(isbn, book)
    }

    fn list(&self) -> Vec<(Isbn, Book)> {
        (**self).list()
    }
}

#[derive(Debug, Default)]
struct Shelf {
    order: Vec<Isbn>,
    books: HashMap<Isbn, Book>,
}

/// In-memory catalog preserving insertion order.
#[derive(Debug, Default)]
pub struct InMemoryBookStore {
    inner: RwLock<Shelf>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from `(isbn, book)` pairs. Later duplicates replace earlier ones.
    pub fn with_books(books: impl IntoIterator<Item = (Isbn, Book)>) -> Self {
        let mut shelf = Shelf::default();
        for (isbn, book) in books {
            if shelf.books.insert(isbn.clone(), book).is_none() {
                shelf.order.push(isbn);
            }
        }
        Self {
            inner: RwLock::new(shelf),
        }
    }
}

impl BookStore for InMemoryBookStore {
    fn get(&self, isbn: &Isbn) -> Option<Book> {
        let shelf = self.inner.read().ok()?;
        shelf.books.get(isbn).cloned()
    }

    fn put(&self, isbn: Isbn, book: Book) -> DomainResult<()> {
        let mut shelf = self
            .inner
            .write()
            .map_err(|_| DomainError::unavailable("book store lock poisoned"))?;

        if shelf.books.insert(isbn.clone(), book).is_none() {
            shelf.order.push(isbn);
        }
        Ok(())
    }

    fn list(&self) -> Vec<(Isbn, Book)> {
        let shelf = match self.inner.read() {
            Ok(s) => s,
            Err(_) => return vec![],
        };

        shelf
            .order
            .iter()
            .filter_map(|isbn| shelf.books.get(isbn).map(|b| (isbn.clone(), b.clone())))
            .collect()
    }
}
