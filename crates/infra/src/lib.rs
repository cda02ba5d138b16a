//! Infrastructure layer: repositories and catalog loading.

pub mod catalog_file;
pub mod store;

pub use catalog_file::load_catalog;
pub use store::{BookStore, InMemoryBookStore, InMemoryUserStore, UserStore};
