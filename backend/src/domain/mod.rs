//! Domain primitives, aggregates and services.
//!
//! Purpose: define strongly typed entities used by the HTTP and persistence
//! layers and the services that implement the driving ports. Types are
//! immutable once validated; serialisation contracts are documented on each
//! type.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Credentials, Username, User, PasswordHash: account identity.
//! - Book, BookName, OwnerId, NewBook: catalogue entries.
//! - ChapterDocument and friends: indexed chapters with revisions.
//! - DocumentId, NodeId, TraversalQuery: read-side lookups.
//! - AccountService, BookCatalogueService, ChapterService,
//!   NewsDetailService, GraphDemoService: driving port implementations.

mod accounts;
pub mod auth;
pub mod book;
mod catalogue;
pub mod chapter;
mod chapters;
mod detail;
pub mod error;
pub mod graph;
mod graph_demo;
pub mod news;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::accounts::AccountService;
pub use self::auth::{Credentials, CredentialsValidationError, PasswordHash, PasswordHashError};
pub use self::book::{
    BOOK_NAME_MAX, Book, BookName, BookStatus, BookValidationError, CREATE_TIME_FORMAT,
    CreateTime, NewBook, OwnerId,
};
pub use self::catalogue::BookCatalogueService;
pub use self::chapter::{
    BookId, ChapterCreated, ChapterDocument, ChapterDraft, ChapterEdit, ChapterEditOutcome,
    ChapterId, ChapterRevision, ChapterVersion, EmptyChapterId, StoredChapter,
};
pub use self::chapters::ChapterService;
pub use self::detail::NewsDetailService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::graph::{NEIGHBOURS_STATEMENT, NodeId, TraversalQuery, TraversalRows};
pub use self::graph_demo::GraphDemoService;
pub use self::news::{DocumentId, EmptyDocumentId};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USERNAME_MAX, User, Username, UsernameValidationError};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use bookshelf::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
