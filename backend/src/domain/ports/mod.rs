//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports (`*Command`, `*Query`, [`BookCatalogue`]) are called by
//! inbound adapters. Driven ports (repositories, indexes, the graph store)
//! are implemented by outbound adapters and expose strongly typed errors.

mod macros;
pub(crate) use macros::define_port_error;

mod account_command;
mod book_catalogue;
mod book_repository;
mod chapter_command;
mod graph_demo_query;
mod graph_store;
mod news_detail_query;
mod search_index;
mod user_repository;

#[cfg(test)]
pub use account_command::MockAccountCommand;
pub use account_command::{AccountCommand, LoginOutcome, RegistrationOutcome};
#[cfg(test)]
pub use book_catalogue::MockBookCatalogue;
pub use book_catalogue::{AddBookOutcome, BookCatalogue};
#[cfg(test)]
pub use book_repository::MockBookRepository;
pub use book_repository::{BookPersistenceError, BookRepository};
pub use chapter_command::ChapterCommand;
#[cfg(test)]
pub use chapter_command::MockChapterCommand;
#[cfg(test)]
pub use graph_demo_query::MockGraphDemoQuery;
pub use graph_demo_query::{GraphDemoQuery, UnconfiguredGraphDemo};
#[cfg(test)]
pub use graph_store::MockGraphStore;
pub use graph_store::{GraphStore, GraphStoreError};
#[cfg(test)]
pub use news_detail_query::MockNewsDetailQuery;
pub use news_detail_query::NewsDetailQuery;
#[cfg(test)]
pub use search_index::{MockChapterIndex, MockNewsIndex};
pub use search_index::{ChapterIndex, NewsIndex, SearchIndexError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
