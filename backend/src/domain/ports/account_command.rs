//! Driving port for registration and login.
//!
//! Inbound adapters call this port without knowing how credentials are
//! stored, which keeps handler tests free of persistence wiring.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, Username};

/// Result of a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// The user was created.
    Registered,
    /// The username belongs to an existing user; nothing was written.
    UsernameTaken,
}

/// Result of a login attempt.
///
/// Unknown usernames and wrong passwords share [`LoginOutcome::Rejected`] so
/// callers cannot tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Credentials matched the stored hash.
    Authenticated { username: Username },
    /// Credentials did not match any user.
    Rejected,
}

/// Domain use-case port for account management.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountCommand: Send + Sync {
    /// Create a user unless the username is taken.
    async fn register(&self, credentials: Credentials) -> Result<RegistrationOutcome, Error>;

    /// Check credentials against the stored hash.
    async fn login(&self, credentials: Credentials) -> Result<LoginOutcome, Error>;
}
