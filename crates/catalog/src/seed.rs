//! Built-in catalog used when no catalog file is configured.

use bookstore_core::Isbn;

use crate::book::Book;

const SEED: &[(&str, &str, &str)] = &[
    ("1", "Chinua Achebe", "Things Fall Apart"),
    ("2", "Hans Christian Andersen", "Fairy tales"),
    ("3", "Dante Alighieri", "The Divine Comedy"),
    ("4", "Unknown", "The Epic Of Gilgamesh"),
    ("5", "Unknown", "The Book Of Job"),
    ("6", "Unknown", "One Thousand and One Nights"),
    ("7", "Unknown", "Njál's Saga"),
    ("8", "Jane Austen", "Pride and Prejudice"),
    ("9", "Honoré de Balzac", "Le Père Goriot"),
    ("10", "Samuel Beckett", "Molloy, Malone Dies, The Unnamable, the trilogy"),
];

/// The seed catalog in insertion order, with no reviews.
pub fn seed_catalog() -> Vec<(Isbn, Book)> {
    SEED.iter()
        .filter_map(|(isbn, author, title)| {
            Isbn::parse(*isbn).ok().map(|isbn| (isbn, Book::new(*author, *title)))
        })
        .collect()
}
