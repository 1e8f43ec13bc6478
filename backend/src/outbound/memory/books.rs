//! In-memory book catalogue.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::ports::{BookPersistenceError, BookRepository};
use crate::domain::{Book, BookName, NewBook, OwnerId};

use super::POISONED;

#[derive(Debug, Default)]
struct Catalogue {
    books: Vec<Book>,
    last_id: i64,
}

/// Book catalogue with ids assigned in insertion order, starting at 1.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    inner: Mutex<Catalogue>,
}

impl InMemoryBookRepository {
    /// Empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn find_by_name(&self, name: &BookName) -> Result<Option<Book>, BookPersistenceError> {
        let catalogue = self
            .inner
            .lock()
            .map_err(|_| BookPersistenceError::query(POISONED))?;
        Ok(catalogue.books.iter().find(|book| book.name() == name).cloned())
    }

    async fn insert(&self, book: &NewBook) -> Result<Book, BookPersistenceError> {
        let mut catalogue = self
            .inner
            .lock()
            .map_err(|_| BookPersistenceError::query(POISONED))?;
        if catalogue.books.iter().any(|stored| stored.name() == &book.name) {
            return Err(BookPersistenceError::duplicate(book.name.as_ref()));
        }
        catalogue.last_id += 1;
        let stored = Book::from_new(catalogue.last_id, book.clone());
        catalogue.books.push(stored.clone());
        Ok(stored)
    }

    async fn list_by_owner(&self, owner: OwnerId) -> Result<Vec<Book>, BookPersistenceError> {
        let catalogue = self
            .inner
            .lock()
            .map_err(|_| BookPersistenceError::query(POISONED))?;
        Ok(catalogue
            .books
            .iter()
            .filter(|book| book.owner() == owner)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookStatus, CreateTime};
    use rstest::rstest;

    fn new_book(name: &str, owner: i64) -> NewBook {
        NewBook {
            name: BookName::new(name).expect("valid name"),
            owner: OwnerId::new(owner),
            created: CreateTime::from_stored("2024-03-09 14:05:30"),
            status: BookStatus::INITIAL,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn ids_increase_and_listing_filters_by_owner() {
        let repo = InMemoryBookRepository::new();
        let first = repo.insert(&new_book("A", 1)).await.expect("insert");
        repo.insert(&new_book("B", 2)).await.expect("insert");
        let third = repo.insert(&new_book("C", 1)).await.expect("insert");

        let owned = repo.list_by_owner(OwnerId::new(1)).await.expect("list");

        assert_eq!(first.id(), 1);
        assert_eq!(third.id(), 3);
        assert_eq!(
            owned.iter().map(Book::id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn names_are_unique_across_owners() {
        let repo = InMemoryBookRepository::new();
        repo.insert(&new_book("Dune", 1)).await.expect("insert");

        let err = repo.insert(&new_book("Dune", 2)).await.expect_err("taken");

        assert_eq!(err, BookPersistenceError::duplicate("Dune"));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_owners_have_no_books() {
        let repo = InMemoryBookRepository::new();
        assert!(repo.list_by_owner(OwnerId::new(9)).await.expect("list").is_empty());
    }
}
