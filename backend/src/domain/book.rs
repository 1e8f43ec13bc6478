//! Book catalogue model.
//!
//! A book is identified by its name across the whole catalogue; the owner id
//! is an opaque reference with no referential integrity.

use std::fmt;

use chrono::{DateTime, TimeZone};

/// Maximum book name length, matching the `books.bookname` column.
pub const BOOK_NAME_MAX: usize = 255;

/// Layout of [`CreateTime`] strings.
pub const CREATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Validation errors for book fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookValidationError {
    /// Book name empty or whitespace only.
    #[error("bookname must not be empty")]
    EmptyName,
    /// Book name longer than [`BOOK_NAME_MAX`].
    #[error("bookname must be at most {max} characters")]
    NameTooLong { max: usize },
}

/// Catalogue-wide unique book title.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookName(String);

impl BookName {
    /// Validate and construct a [`BookName`]. The name is kept exactly as
    /// given, so `"Dune"` and `"Dune "` are different books.
    pub fn new(raw: &str) -> Result<Self, BookValidationError> {
        if raw.trim().is_empty() {
            return Err(BookValidationError::EmptyName);
        }
        if raw.chars().count() > BOOK_NAME_MAX {
            return Err(BookValidationError::NameTooLong { max: BOOK_NAME_MAX });
        }
        Ok(Self(raw.to_owned()))
    }
}

impl AsRef<str> for BookName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of the user owning a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OwnerId(i64);

impl OwnerId {
    /// Wrap a raw owner id.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Small integer lifecycle code. Only [`BookStatus::INITIAL`] has meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookStatus(i16);

impl BookStatus {
    /// Status of a freshly created book.
    pub const INITIAL: Self = Self(0);

    /// Wrap a stored status code.
    pub const fn from_code(code: i16) -> Self {
        Self(code)
    }

    /// Raw status code.
    pub const fn code(self) -> i16 {
        self.0
    }
}

/// Wall-clock creation time rendered as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTime(String);

impl CreateTime {
    /// Render `at` in [`CREATE_TIME_FORMAT`] using its own time zone.
    pub fn from_datetime<Tz>(at: &DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        Self(at.format(CREATE_TIME_FORMAT).to_string())
    }

    /// Wrap a value read back from storage.
    pub fn from_stored(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl AsRef<str> for CreateTime {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Book about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub name: BookName,
    pub owner: OwnerId,
    pub created: CreateTime,
    pub status: BookStatus,
}

/// Stored book record including its surrogate key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: i64,
    name: BookName,
    owner: OwnerId,
    created: CreateTime,
    status: BookStatus,
}

impl Book {
    /// Attach a surrogate key to a persisted [`NewBook`].
    pub fn from_new(id: i64, book: NewBook) -> Self {
        let NewBook {
            name,
            owner,
            created,
            status,
        } = book;
        Self {
            id,
            name,
            owner,
            created,
            status,
        }
    }

    /// Surrogate key assigned by the catalogue store.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Catalogue-wide unique title.
    pub fn name(&self) -> &BookName {
        &self.name
    }

    /// Owning user.
    pub fn owner(&self) -> OwnerId {
        self.owner
    }

    /// Formatted creation time.
    pub fn created(&self) -> &CreateTime {
        &self.created
    }

    /// Lifecycle status.
    pub fn status(&self) -> BookStatus {
        self.status
    }
}
