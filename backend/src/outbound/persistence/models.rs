//! Internal Diesel row structs for database operations.
//!
//! These types never leave the persistence layer. Conversions into domain
//! types live alongside the rows so repositories stay thin.

use diesel::prelude::*;

use crate::domain::{
    Book, BookName, BookStatus, CreateTime, NewBook, OwnerId, PasswordHash, User, Username,
};

use super::schema::{books, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    #[expect(dead_code, reason = "surrogate key is not part of the domain user")]
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a User> for NewUserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            username: user.username().as_ref(),
            password: user.password_hash().as_ref(),
        }
    }
}

/// Row struct for reading from the books table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct BookRow {
    pub id: i64,
    pub bookname: String,
    pub userid: i64,
    pub createtime: String,
    pub bookstatus: i16,
}

/// Insertable struct for creating new book records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = books)]
pub(crate) struct NewBookRow<'a> {
    pub bookname: &'a str,
    pub userid: i64,
    pub createtime: &'a str,
    pub bookstatus: i16,
}

impl<'a> From<&'a NewBook> for NewBookRow<'a> {
    fn from(book: &'a NewBook) -> Self {
        Self {
            bookname: book.name.as_ref(),
            userid: book.owner.get(),
            createtime: book.created.as_ref(),
            bookstatus: book.status.code(),
        }
    }
}

/// Raised when a stored value no longer satisfies domain validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("stored {column} is invalid: {message}")]
pub(crate) struct InvalidRow {
    pub column: &'static str,
    pub message: String,
}

impl TryFrom<UserRow> for User {
    type Error = InvalidRow;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let username = Username::new(&row.username).map_err(|err| InvalidRow {
            column: "users.username",
            message: err.to_string(),
        })?;
        Ok(User::new(username, PasswordHash::from_stored(row.password)))
    }
}

impl TryFrom<BookRow> for Book {
    type Error = InvalidRow;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let name = BookName::new(&row.bookname).map_err(|err| InvalidRow {
            column: "books.bookname",
            message: err.to_string(),
        })?;
        Ok(Book::from_new(
            row.id,
            NewBook {
                name,
                owner: OwnerId::new(row.userid),
                created: CreateTime::from_stored(row.createtime),
                status: BookStatus::from_code(row.bookstatus),
            },
        ))
    }
}
