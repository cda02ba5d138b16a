//! Registered users and the registration/login rules.
//!
//! Storage lives elsewhere; this module only decides what a valid registration
//! or login looks like.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use bookstore_core::Username;

/// A registered user.
///
/// # Invariants
/// - `username` is unique across the user store (enforced by the store).
/// - The password is compared by exact match; no hashing policy applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: Username,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub fn new(username: Username, password: impl Into<String>) -> Self {
        Self {
            username,
            password: password.into(),
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}

/// Credentials as submitted in a request body.
///
/// Fields are optional so that missing values can be reported precisely.
/// An empty string counts as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
        }
    }

    fn present(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.is_empty())
    }

    /// Turn a registration request into the user record to store.
    pub fn into_registration(self) -> Result<User, RegistrationError> {
        let username = Self::present(self.username);
        let password = Self::present(self.password);

        match (username, password) {
            (Some(username), Some(password)) => {
                let username = Username::parse(username).map_err(|_| RegistrationError::MissingFields {
                    username: true,
                    password: false,
                })?;
                Ok(User::new(username, password))
            }
            (username, password) => Err(RegistrationError::MissingFields {
                username: username.is_none(),
                password: password.is_none(),
            }),
        }
    }

    /// Split a login request into the username to look up and the password to check.
    pub fn into_login(self) -> Result<(Username, String), LoginError> {
        let username = Self::present(self.username).ok_or(LoginError::MissingCredentials)?;
        let password = Self::present(self.password).ok_or(LoginError::MissingCredentials)?;
        let username = Username::parse(username).map_err(|_| LoginError::MissingCredentials)?;
        Ok((username, password))
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error(
        "Unable to register user: {} must be present in the body as keys of a JSON.",
        missing_field_list(.username, .password)
    )]
    MissingFields { username: bool, password: bool },

    #[error("User already exists!")]
    AlreadyExists,
}

fn missing_field_list(username: &bool, password: &bool) -> String {
    match (*username, *password) {
        (true, true) => "'username' and 'password'".to_string(),
        (true, false) => "'username'".to_string(),
        (false, true) => "'password'".to_string(),
        (false, false) => String::new(),
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoginError {
    #[error("Error logging in")]
    MissingCredentials,

    /// Unknown username and wrong password are deliberately indistinguishable.
    #[error("Invalid Login. Check username and password")]
    InvalidCredentials,
}

/// Check a login attempt against the stored record for that username, if any.
pub fn verify_login(stored: Option<&User>, password: &str) -> Result<Username, LoginError> {
    match stored {
        Some(user) if user.password_matches(password) => Ok(user.username.clone()),
        _ => Err(LoginError::InvalidCredentials),
    }
}
