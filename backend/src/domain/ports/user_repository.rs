//! Credential store port.
use async_trait::async_trait;

use crate::domain::{User, Username};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another user already holds the username.
        Duplicate { username: String } => "username {username} is already registered",
    }
}

/// Driven port over the credential store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch the user registered under `username`.
    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Insert a new user.
    ///
    /// Returns [`UserPersistenceError::Duplicate`] when the username is taken,
    /// even if a prior lookup saw it free.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;
}
