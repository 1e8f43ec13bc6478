//! Account registration and login.
//!
//! Password hashing and verification are CPU bound, so both run on the
//! blocking pool rather than on the async executor.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::task;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::domain::ports::{
    AccountCommand, LoginOutcome, RegistrationOutcome, UserPersistenceError, UserRepository,
};
use crate::domain::{Credentials, Error, PasswordHash, User};

/// Account service implementing [`AccountCommand`].
#[derive(Clone)]
pub struct AccountService<R> {
    users: Arc<R>,
}

impl<R> AccountService<R> {
    /// Create a new service backed by `users`.
    pub fn new(users: Arc<R>) -> Self {
        Self { users }
    }
}

impl<R> AccountService<R>
where
    R: UserRepository,
{
    fn map_user_error(error: UserPersistenceError) -> Error {
        match error {
            UserPersistenceError::Connection { message } => {
                Error::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Error::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::Duplicate { username } => {
                Error::internal(format!("unexpected duplicate user: {username}"))
            }
        }
    }

    async fn hash_password(password: Zeroizing<String>) -> Result<PasswordHash, Error> {
        task::spawn_blocking(move || PasswordHash::generate(&password))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(|err| Error::internal(err.to_string()))
    }

    async fn verify_password(
        hash: PasswordHash,
        candidate: Zeroizing<String>,
    ) -> Result<bool, Error> {
        task::spawn_blocking(move || hash.verify(&candidate))
            .await
            .map_err(|err| Error::internal(format!("password verification task failed: {err}")))
    }
}

#[async_trait]
impl<R> AccountCommand for AccountService<R>
where
    R: UserRepository,
{
    async fn register(&self, credentials: Credentials) -> Result<RegistrationOutcome, Error> {
        let username = credentials.username().clone();
        let existing = self
            .users
            .find_by_username(&username)
            .await
            .map_err(Self::map_user_error)?;
        if existing.is_some() {
            debug!(%username, "registration rejected: username taken");
            return Ok(RegistrationOutcome::UsernameTaken);
        }

        let hash = Self::hash_password(Zeroizing::new(credentials.password().to_owned())).await?;
        let user = User::new(username.clone(), hash);
        match self.users.insert(&user).await {
            Ok(()) => {
                info!(%username, "user registered");
                Ok(RegistrationOutcome::Registered)
            }
            // A concurrent registration won the unique index.
            Err(UserPersistenceError::Duplicate { .. }) => Ok(RegistrationOutcome::UsernameTaken),
            Err(err) => Err(Self::map_user_error(err)),
        }
    }

    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, Error> {
        let Some(user) = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(Self::map_user_error)?
        else {
            return Ok(LoginOutcome::Rejected);
        };

        let matches = Self::verify_password(
            user.password_hash().clone(),
            Zeroizing::new(credentials.password().to_owned()),
        )
        .await?;
        if matches {
            Ok(LoginOutcome::Authenticated {
                username: user.username().clone(),
            })
        } else {
            Ok(LoginOutcome::Rejected)
        }
    }
}
