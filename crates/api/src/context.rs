use bookstore_core::Username;

/// Principal context for a request (verified identity).
///
/// Inserted by the auth middleware; present on every `/customer/auth` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    username: Username,
}

impl PrincipalContext {
    pub fn new(username: Username) -> Self {
        Self { username }
    }

    pub fn username(&self) -> &Username {
        &self.username
    }
}
