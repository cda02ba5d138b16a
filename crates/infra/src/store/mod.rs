//! Repository abstractions over users and books.
//!
//! Route logic only sees the traits; the in-memory implementations are the
//! default backend.

pub mod books;
pub mod users;

pub use books::{BookStore, InMemoryBookStore};
pub use users::{InMemoryUserStore, UserStore};
