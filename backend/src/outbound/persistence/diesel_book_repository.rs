//! PostgreSQL-backed `BookRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{BookPersistenceError, BookRepository};
use crate::domain::{Book, BookName, NewBook, OwnerId};

use super::diesel_error_mapping::{DieselFailure, classify_diesel_error, map_pool_error};
use super::models::{BookRow, NewBookRow};
use super::pool::{DbPool, PoolError};
use super::schema::books;

/// Diesel-backed book catalogue.
#[derive(Clone)]
pub struct DieselBookRepository {
    pool: DbPool,
}

impl DieselBookRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool(error: PoolError) -> BookPersistenceError {
    map_pool_error(error, |message| BookPersistenceError::connection(message))
}

fn map_diesel(error: diesel::result::Error, name: Option<&BookName>) -> BookPersistenceError {
    match (classify_diesel_error(&error), name) {
        (DieselFailure::Connection(message), _) => BookPersistenceError::connection(message),
        (DieselFailure::UniqueViolation, Some(name)) => {
            BookPersistenceError::duplicate(name.as_ref())
        }
        (DieselFailure::UniqueViolation, None) => {
            BookPersistenceError::query("unexpected unique violation")
        }
        (DieselFailure::Query(message), _) => BookPersistenceError::query(message),
    }
}

fn into_book(row: BookRow) -> Result<Book, BookPersistenceError> {
    Book::try_from(row).map_err(|err| BookPersistenceError::query(err.to_string()))
}

#[async_trait]
impl BookRepository for DieselBookRepository {
    async fn find_by_name(&self, name: &BookName) -> Result<Option<Book>, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let row = books::table
            .filter(books::bookname.eq(name.as_ref()))
            .select(BookRow::as_select())
            .first::<BookRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel(err, None))?;

        row.map(into_book).transpose()
    }

    async fn insert(&self, book: &NewBook) -> Result<Book, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let row = diesel::insert_into(books::table)
            .values(NewBookRow::from(book))
            .returning(BookRow::as_returning())
            .get_result::<BookRow>(&mut conn)
            .await
            .map_err(|err| map_diesel(err, Some(&book.name)))?;

        debug!(book_id = row.id, owner = row.userid, "book inserted");
        into_book(row)
    }

    async fn list_by_owner(&self, owner: OwnerId) -> Result<Vec<Book>, BookPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool)?;

        let rows = books::table
            .filter(books::userid.eq(owner.get()))
            .order(books::id.asc())
            .select(BookRow::as_select())
            .load::<BookRow>(&mut conn)
            .await
            .map_err(|err| map_diesel(err, None))?;

        rows.into_iter().map(into_book).collect()
    }
}
