//! `bookstore-auth`: authentication boundary.
//!
//! User records, registration/login rules and access tokens. Decoupled from
//! HTTP and storage.

pub mod claims;
pub mod token;
pub mod user;

pub use claims::{AccessClaims, TokenValidationError};
pub use token::{Hs256Jwt, JwtValidator, TokenError, TokenIssuer};
pub use user::{Credentials, LoginError, RegistrationError, User, verify_login};
