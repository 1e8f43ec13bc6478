//! The `{code, message}` envelope returned by the write and login endpoints.
//!
//! Business-rule outcomes (taken usernames, duplicate book names, rejected
//! credentials, lost chapter edits) are successful HTTP exchanges: they use
//! status 200 with `code` 0. Only malformed requests and store failures use
//! error statuses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub(crate) const LOGIN_SUCCEEDED: &str = "login succeeded";
pub(crate) const LOGIN_REJECTED: &str = "invalid username or password";
pub(crate) const USERNAME_TAKEN: &str = "username already exists";
pub(crate) const REGISTERED: &str = "registration succeeded";
pub(crate) const BOOK_EXISTS: &str = "book already exists";
pub(crate) const BOOK_CREATED: &str = "book created";
pub(crate) const CHAPTER_CREATED: &str = "chapter created";
pub(crate) const CHAPTER_UPDATED: &str = "chapter updated";
pub(crate) const CHAPTER_NOT_FOUND: &str = "chapter not found";
pub(crate) const CHAPTER_CONFLICT: &str = "chapter was modified concurrently";

/// Outcome envelope: `code` is 1 on success and 0 on a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Envelope {
    #[schema(example = 1)]
    pub code: u8,
    #[schema(example = "book created")]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapterid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapterversion: Option<u32>,
}

impl Envelope {
    fn with_code(code: u8, message: &str) -> Self {
        Self {
            code,
            message: message.to_owned(),
            username: None,
            chapterid: None,
            chapterversion: None,
        }
    }

    /// `code: 1` envelope.
    pub fn success(message: &str) -> Self {
        Self::with_code(1, message)
    }

    /// `code: 0` envelope.
    pub fn rejected(message: &str) -> Self {
        Self::with_code(0, message)
    }

    #[must_use]
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn with_chapter_id(mut self, chapter_id: impl Into<String>) -> Self {
        self.chapterid = Some(chapter_id.into());
        self
    }

    #[must_use]
    pub fn with_chapter_version(mut self, version: u32) -> Self {
        self.chapterversion = Some(version);
        self
    }
}
