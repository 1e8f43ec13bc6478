//! Driving port for the book catalogue.

use async_trait::async_trait;

use crate::domain::{Book, BookName, Error, OwnerId};

/// Result of adding a book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddBookOutcome {
    /// The book was stored.
    Created(Book),
    /// A book with the same name exists somewhere in the catalogue.
    NameTaken,
}

/// Domain use-case port for catalogue reads and writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookCatalogue: Send + Sync {
    /// Add a book for `owner` unless the name is already used by anyone.
    async fn add_book(&self, owner: OwnerId, name: BookName) -> Result<AddBookOutcome, Error>;

    /// All books owned by `owner`.
    async fn list_books(&self, owner: OwnerId) -> Result<Vec<Book>, Error>;
}
