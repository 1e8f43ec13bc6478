//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories implement the credential and catalogue ports over
//! `diesel-async` connections drawn from a `bb8` pool. Row structs and table
//! definitions stay private to this module; only domain types cross the port.
//!
//! Uniqueness of usernames and book names is enforced by unique indexes, so a
//! racing insert surfaces as a `Duplicate` error instead of a second row.
//!
//! # Example
//!
//! ```no_run
//! use bookshelf::outbound::persistence::{DbPool, DieselBookRepository, PoolConfig};
//!
//! # async fn build() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/bookshelf")).await?;
//! let books = DieselBookRepository::new(pool);
//! # let _ = books;
//! # Ok(())
//! # }
//! ```

mod diesel_book_repository;
mod diesel_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_book_repository::DieselBookRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
