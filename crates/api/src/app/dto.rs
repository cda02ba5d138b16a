use axum::body::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use bookstore_auth::Credentials;
use bookstore_catalog::Book;
use bookstore_core::Isbn;

use crate::app::errors::ApiError;
use crate::context::PrincipalContext;

// -------------------------
// Request DTOs
// -------------------------

/// Optional `{username}` body of review mutations.
#[derive(Debug, Default, Deserialize)]
pub struct ActorRequest {
    #[serde(default)]
    pub username: Option<String>,
}

/// Text of the first `review` query parameter, if any.
pub fn review_text(query: &[(String, String)]) -> Option<String> {
    query
        .iter()
        .find(|(key, _)| key == "review")
        .map(|(_, value)| value.clone())
}

/// Parse credentials leniently, field by field.
///
/// An absent or unreadable body means no fields at all. A badly typed field
/// does not hide the other one.
pub fn credentials_from_body(body: &Bytes) -> Credentials {
    let value: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
    Credentials {
        username: value.get("username").and_then(supplied_text),
        password: value.get("password").and_then(supplied_text),
    }
}

/// Falsy JSON (`null`, `false`, `0`, `""`) counts as not supplied; other
/// non-string values are taken in their JSON text form.
fn supplied_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(text) => Some(text.clone()).filter(|t| !t.is_empty()),
        other => Some(other.to_string()),
    }
}

/// Parse an optional JSON body. Empty means `T::default()`, malformed is an error.
pub fn parse_json_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|_| ApiError::InvalidBody)
}

/// A body-supplied username must match the verified principal.
pub fn ensure_actor(principal: &PrincipalContext, actor: &ActorRequest) -> Result<(), ApiError> {
    match actor.username.as_deref() {
        Some(name) if !name.is_empty() && name != principal.username().as_str() => {
            Err(ApiError::ForeignAuthor)
        }
        _ => Ok(()),
    }
}

// -------------------------
// Response DTOs
// -------------------------

/// The full catalog as one JSON object (ISBN -> book), in store order.
#[derive(Debug)]
pub struct CatalogListing(pub Vec<(Isbn, Book)>);

impl Serialize for CatalogListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(isbn, book)| (isbn, book)))
    }
}

pub fn message(text: impl Into<String>) -> serde_json::Value {
    serde_json::json!({ "message": text.into() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookstore_core::Username;

    fn principal(name: &str) -> PrincipalContext {
        PrincipalContext::new(Username::parse(name).unwrap())
    }

    #[test]
    fn unreadable_credentials_are_empty() {
        assert_eq!(credentials_from_body(&Bytes::new()), Credentials::default());
        assert_eq!(credentials_from_body(&Bytes::from_static(b"{oops")), Credentials::default());
        assert_eq!(
            credentials_from_body(&Bytes::from_static(br#"{"username":"a"}"#)).username.as_deref(),
            Some("a")
        );
    }

    #[test]
    fn badly_typed_field_keeps_the_other() {
        let creds = credentials_from_body(&Bytes::from_static(br#"{"username":"alice","password":123}"#));
        assert_eq!(creds, Credentials::new("alice", "123"));

        let creds = credentials_from_body(&Bytes::from_static(br#"{"username":"alice","password":false}"#));
        assert_eq!(creds.username.as_deref(), Some("alice"));
        assert!(creds.password.is_none());

        let creds = credentials_from_body(&Bytes::from_static(br#"{"username":0,"password":"pw"}"#));
        assert!(creds.username.is_none());
        assert_eq!(creds.password.as_deref(), Some("pw"));
    }

    #[test]
    fn first_review_parameter_wins() {
        let pairs = |items: &[(&str, &str)]| -> Vec<(String, String)> {
            items.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
        };

        assert_eq!(review_text(&pairs(&[("review", "x"), ("review", "y")])).as_deref(), Some("x"));
        assert_eq!(review_text(&pairs(&[("other", "x")])), None);
        assert_eq!(review_text(&[]), None);
    }

    #[test]
    fn optional_body_parsing() {
        let empty: ActorRequest = parse_json_body(&Bytes::from_static(b"  \n")).unwrap();
        assert!(empty.username.is_none());

        let named: ActorRequest = parse_json_body(&Bytes::from_static(br#"{"username":"bob"}"#)).unwrap();
        assert_eq!(named.username.as_deref(), Some("bob"));

        assert!(matches!(
            parse_json_body::<ActorRequest>(&Bytes::from_static(b"not json")),
            Err(ApiError::InvalidBody)
        ));
    }

    #[test]
    fn actor_must_match_principal_when_given() {
        let alice = principal("alice");
        let named = |n: Option<&str>| ActorRequest {
            username: n.map(str::to_string),
        };

        assert!(ensure_actor(&alice, &named(None)).is_ok());
        assert!(ensure_actor(&alice, &named(Some("alice"))).is_ok());
        assert!(matches!(
            ensure_actor(&alice, &named(Some("mallory"))),
            Err(ApiError::ForeignAuthor)
        ));
    }

    #[test]
    fn catalog_listing_keeps_order() {
        let listing = CatalogListing(vec![
            (Isbn::parse("2").unwrap(), Book::new("B", "Two")),
            (Isbn::parse("1").unwrap(), Book::new("A", "One")),
        ]);

        let text = serde_json::to_string(&listing).unwrap();
        assert!(text.find("\"2\"").unwrap() < text.find("\"1\"").unwrap());
    }
}
