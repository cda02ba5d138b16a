//! Per-book reviews keyed by username, in first-written order.

use core::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use bookstore_core::Username;

/// Username -> review text. Serializes as a JSON object.
///
/// Updating a review keeps its position; deleting and re-creating one moves it
/// to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reviews {
    entries: Vec<(Username, String)>,
}

impl Reviews {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, username: &Username) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == username)
            .map(|(_, text)| text.as_str())
    }

    /// Insert or replace, returning the previous text.
    pub fn insert(&mut self, username: Username, text: String) -> Option<String> {
        match self.entries.iter_mut().find(|(name, _)| *name == username) {
            Some((_, existing)) => Some(core::mem::replace(existing, text)),
            None => {
                self.entries.push((username, text));
                None
            }
        }
    }

    pub fn remove(&mut self, username: &Username) -> Option<String> {
        let idx = self.entries.iter().position(|(name, _)| name == username)?;
        Some(self.entries.remove(idx).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Username, &str)> {
        self.entries.iter().map(|(name, text)| (name, text.as_str()))
    }
}

impl Serialize for Reviews {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for Reviews {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ReviewsVisitor;

        impl<'de> Visitor<'de> for ReviewsVisitor {
            type Value = Reviews;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping usernames to review text")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Reviews, A::Error> {
                let mut reviews = Reviews::default();
                while let Some((username, text)) = map.next_entry::<Username, String>()? {
                    reviews.insert(username, text);
                }
                Ok(reviews)
            }
        }

        deserializer.deserialize_map(ReviewsVisitor)
    }
}
