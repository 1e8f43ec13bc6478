//! In-memory credential store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, Username};

use super::POISONED;

/// Credential store keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: Mutex<HashMap<Username, User>>,
}

impl InMemoryUserRepository {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError> {
        let users = self
            .users
            .lock()
            .map_err(|_| UserPersistenceError::query(POISONED))?;
        Ok(users.get(username).cloned())
    }

    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self
            .users
            .lock()
            .map_err(|_| UserPersistenceError::query(POISONED))?;
        if users.contains_key(user.username()) {
            return Err(UserPersistenceError::duplicate(user.username().as_ref()));
        }
        users.insert(user.username().clone(), user.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PasswordHash;
    use rstest::rstest;

    fn user(name: &str) -> User {
        User::new(
            Username::new(name).expect("valid username"),
            PasswordHash::from_stored("$argon2id$stub"),
        )
    }

    #[rstest]
    #[tokio::test]
    async fn inserted_users_can_be_found() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user("ada")).await.expect("insert");

        let found = repo
            .find_by_username(&Username::new("ada").expect("valid"))
            .await
            .expect("lookup");

        assert_eq!(found, Some(user("ada")));
    }

    #[rstest]
    #[tokio::test]
    async fn second_insert_of_a_username_is_a_duplicate() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&user("ada")).await.expect("insert");

        let err = repo.insert(&user("ada")).await.expect_err("duplicate");

        assert_eq!(err, UserPersistenceError::duplicate("ada"));
    }
}
