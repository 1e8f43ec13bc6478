//! Authentication primitives: credentials and salted password hashes.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to a port or service.

use std::fmt;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Argon2, PasswordHash as PhcString};
use zeroize::Zeroizing;

use super::user::{Username, UsernameValidationError};

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsValidationError {
    /// Username was missing or blank once trimmed.
    #[error("username must not be empty")]
    EmptyUsername,
    /// Username exceeded the stored column width.
    #[error("username must be at most {max} characters")]
    UsernameTooLong { max: usize },
    /// Password was blank.
    #[error("password must not be empty")]
    EmptyPassword,
}

impl From<UsernameValidationError> for CredentialsValidationError {
    fn from(value: UsernameValidationError) -> Self {
        match value {
            UsernameValidationError::Empty => Self::EmptyUsername,
            UsernameValidationError::TooLong { max } => Self::UsernameTooLong { max },
        }
    }
}

/// Validated credentials used by login and registration.
///
/// ## Invariants
/// - `username` satisfies [`Username`] validation.
/// - `password` is non-empty but keeps caller-provided whitespace to avoid
///   surprising credential comparisons.
///
/// # Examples
/// ```
/// use bookshelf::domain::Credentials;
///
/// let creds = Credentials::try_from_parts(" ada ", "lovelace").unwrap();
/// assert_eq!(creds.username().as_ref(), "ada");
/// assert_eq!(creds.password(), "lovelace");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: Username,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(
        username: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let username = Username::new(username)?;
        if password.is_empty() {
            return Err(CredentialsValidationError::EmptyPassword);
        }

        Ok(Self {
            username,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Validated username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Plaintext password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Failure raised while producing a password hash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("password hashing failed: {message}")]
pub struct PasswordHashError {
    message: String,
}

/// Salted Argon2id hash of a password, stored as a PHC string.
///
/// The plaintext never leaves [`Credentials`]; only this hash is persisted.
///
/// # Examples
/// ```
/// use bookshelf::domain::PasswordHash;
///
/// let hash = PasswordHash::generate("s3cret").unwrap();
/// assert_ne!(hash.as_ref(), "s3cret");
/// assert!(hash.verify("s3cret"));
/// assert!(!hash.verify("guess"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Hash `password` with a fresh random salt.
    ///
    /// Argon2 is deliberately slow; async callers should run this on a
    /// blocking thread.
    pub fn generate(password: &str) -> Result<Self, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| Self(hash.to_string()))
            .map_err(|err| PasswordHashError {
                message: err.to_string(),
            })
    }

    /// Wrap a hash previously produced by [`PasswordHash::generate`].
    pub fn from_stored(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    /// Check `candidate` against the stored hash.
    ///
    /// A stored value that is not a valid PHC string never verifies.
    pub fn verify(&self, candidate: &str) -> bool {
        PhcString::new(&self.0).is_ok_and(|parsed| {
            Argon2::default()
                .verify_password(candidate.as_bytes(), &parsed)
                .is_ok()
        })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"..")
            .finish()
    }
}

impl AsRef<str> for PasswordHash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
