//! User data model.

use std::fmt;

use super::auth::PasswordHash;

/// Maximum username length, matching the `users.username` column.
pub const USERNAME_MAX: usize = 64;

/// Validation errors returned by [`Username::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsernameValidationError {
    /// Blank after trimming.
    #[error("username must not be empty")]
    Empty,
    /// Longer than [`USERNAME_MAX`] characters.
    #[error("username must be at most {max} characters")]
    TooLong { max: usize },
}

/// Unique login name of a user.
///
/// ## Invariants
/// - Trimmed and non-empty.
/// - At most [`USERNAME_MAX`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validate and construct a [`Username`].
    pub fn new(raw: &str) -> Result<Self, UsernameValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(UsernameValidationError::Empty);
        }
        if trimmed.chars().count() > USERNAME_MAX {
            return Err(UsernameValidationError::TooLong { max: USERNAME_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registered user: a unique username and its password hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: Username,
    password_hash: PasswordHash,
}

impl User {
    /// Build a user from validated components.
    pub fn new(username: Username, password_hash: PasswordHash) -> Self {
        Self {
            username,
            password_hash,
        }
    }

    /// Login name.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Stored password hash.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
