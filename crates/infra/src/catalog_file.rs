//! Load a catalog from a JSON file shaped like the `GET /` response:
//! an object mapping ISBN to `{author, title, reviews?}`.

use std::path::Path;

use anyhow::{Context, bail};
use serde_json::{Map, Value};

use bookstore_catalog::Book;
use bookstore_core::Isbn;

/// Read the catalog at `path`, keeping the file's key order.
pub fn load_catalog(path: &Path) -> anyhow::Result<Vec<(Isbn, Book)>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file {}", path.display()))?;
    let entries: Map<String, Value> = serde_json::from_str(&raw)
        .with_context(|| format!("catalog file {} is not a JSON object", path.display()))?;

    let mut books = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let isbn = Isbn::parse(key).context("catalog contains an empty ISBN key")?;
        let book: Book = serde_json::from_value(value)
            .with_context(|| format!("invalid book record for ISBN {isbn}"))?;
        books.push((isbn, book));
    }

    if books.is_empty() {
        bail!("catalog file {} contains no books", path.display());
    }

    tracing::info!(path = %path.display(), books = books.len(), "catalog loaded");
    Ok(books)
}
