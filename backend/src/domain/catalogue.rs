//! Book catalogue service.
//!
//! Book names are unique across the whole catalogue, not per owner. The
//! pre-insert lookup gives the common case a cheap answer; the unique index
//! behind [`BookRepository::insert`] settles concurrent writers.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{AddBookOutcome, BookCatalogue, BookPersistenceError, BookRepository};
use crate::domain::{Book, BookName, BookStatus, CreateTime, Error, NewBook, OwnerId};

/// Catalogue service implementing [`BookCatalogue`].
#[derive(Clone)]
pub struct BookCatalogueService<R> {
    books: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> BookCatalogueService<R> {
    /// Create a service over `books`, stamping creation times from `clock`.
    pub fn new(books: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { books, clock }
    }
}

fn map_book_error(error: BookPersistenceError) -> Error {
    match error {
        BookPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("book repository unavailable: {message}"))
        }
        BookPersistenceError::Query { message } => {
            Error::internal(format!("book repository error: {message}"))
        }
        BookPersistenceError::Duplicate { bookname } => {
            Error::internal(format!("unexpected duplicate book: {bookname}"))
        }
    }
}

#[async_trait]
impl<R> BookCatalogue for BookCatalogueService<R>
where
    R: BookRepository,
{
    async fn add_book(&self, owner: OwnerId, name: BookName) -> Result<AddBookOutcome, Error> {
        if self
            .books
            .find_by_name(&name)
            .await
            .map_err(map_book_error)?
            .is_some()
        {
            debug!(bookname = %name, "book rejected: name taken");
            return Ok(AddBookOutcome::NameTaken);
        }

        let new_book = NewBook {
            name,
            owner,
            created: CreateTime::from_datetime(&self.clock.local()),
            status: BookStatus::INITIAL,
        };
        match self.books.insert(&new_book).await {
            Ok(book) => {
                info!(book_id = book.id(), userid = %owner, "book created");
                Ok(AddBookOutcome::Created(book))
            }
            Err(BookPersistenceError::Duplicate { .. }) => Ok(AddBookOutcome::NameTaken),
            Err(err) => Err(map_book_error(err)),
        }
    }

    async fn list_books(&self, owner: OwnerId) -> Result<Vec<Book>, Error> {
        self.books
            .list_by_owner(owner)
            .await
            .map_err(map_book_error)
    }
}
