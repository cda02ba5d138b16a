use std::sync::{Arc, RwLock};

use bookstore_auth::User;
use bookstore_core::{DomainError, DomainResult, Username};

/// User repository.
pub trait UserStore: Send + Sync {
    fn get(&self, username: &Username) -> Option<User>;
    /// Append a user; fails with [`DomainError::Conflict`] if the username is taken.
    fn insert(&self, user: User) -> DomainResult<()>;
    /// All users in registration order.
    fn list(&self) -> Vec<User>;
}

impl<S> UserStore for Arc<S>
where
    S: UserStore + ?Sized,
{
    fn get(&self, username: &Username) -> Option<User> {
        (**self).get(username)
    }

    fn insert(&self, user: User) -> DomainResult<()> {
        (**self).insert(user)
    }

    fn list(&self) -> Vec<User> {
        (**self).list()
    }
}

/// In-memory user list.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserStore for InMemoryUserStore {
    fn get(&self, username: &Username) -> Option<User> {
        let users = self.inner.read().ok()?;
        users.iter().find(|u| &u.username == username).cloned()
    }

    fn insert(&self, user: User) -> DomainResult<()> {
        let mut users = self
            .inner
            .write()
            .map_err(|_| DomainError::unavailable("user store lock poisoned"))?;

        // Check and append under the same write lock.
        if users.iter().any(|u| u.username == user.username) {
            return Err(DomainError::conflict(format!("username {} is taken", user.username)));
        }
        users.push(user);
        Ok(())
    }

    fn list(&self) -> Vec<User> {
        match self.inner.read() {
            Ok(users) => users.clone(),
            Err(_) => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, password: &str) -> User {
        User::new(Username::parse(name).unwrap(), password)
    }

    #[test]
    fn insert_then_get() {
        let store = InMemoryUserStore::new();
        store.insert(user("alice", "pw")).unwrap();

        let found = store.get(&Username::parse("alice").unwrap()).unwrap();
        assert!(found.password_matches("pw"));
        assert!(store.get(&Username::parse("bob").unwrap()).is_none());
    }

    #[test]
    fn duplicate_username_is_a_conflict() {
        let store = InMemoryUserStore::new();
        store.insert(user("alice", "pw")).unwrap();

        let err = store.insert(user("alice", "other")).unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(store.list().len(), 1);
        assert!(store.get(&Username::parse("alice").unwrap()).unwrap().password_matches("pw"));
    }

    #[test]
    fn list_keeps_registration_order() {
        let store: Arc<dyn UserStore> = Arc::new(InMemoryUserStore::new());
        for name in ["carol", "alice", "bob"] {
            store.insert(user(name, "pw")).unwrap();
        }

        let names: Vec<String> = store.list().into_iter().map(|u| u.username.into_inner()).collect();
        assert_eq!(names, ["carol", "alice", "bob"]);
    }
}
