//! Catalogue store port.
use async_trait::async_trait;

use crate::domain::{Book, BookName, NewBook, OwnerId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by book repository adapters.
    pub enum BookPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "book repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "book repository query failed: {message}",
        /// A book with the same name already exists.
        Duplicate { bookname: String } => "book {bookname} already exists",
    }
}

/// Driven port over the book catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Fetch the book carrying `name`, whoever owns it.
    async fn find_by_name(&self, name: &BookName) -> Result<Option<Book>, BookPersistenceError>;

    /// Insert a book and return it with its assigned id.
    ///
    /// Returns [`BookPersistenceError::Duplicate`] on a name collision.
    async fn insert(&self, book: &NewBook) -> Result<Book, BookPersistenceError>;

    /// Every book owned by `owner`, ordered by id. Empty when none.
    async fn list_by_owner(&self, owner: OwnerId) -> Result<Vec<Book>, BookPersistenceError>;
}
