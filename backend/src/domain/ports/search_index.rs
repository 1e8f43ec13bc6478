//! Search index ports for news lookups and chapter documents.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{ChapterDocument, ChapterId, ChapterRevision, DocumentId, StoredChapter};

use super::define_port_error;

define_port_error! {
    /// Errors raised by search index adapters.
    pub enum SearchIndexError {
        /// The index could not be reached or timed out.
        Connection { message: String } => "search index connection failed: {message}",
        /// The index rejected the request.
        Query { message: String } => "search index query failed: {message}",
        /// The index answered with an unexpected payload.
        Decode { message: String } => "search index response could not be decoded: {message}",
        /// A conditional write lost against a newer revision.
        VersionConflict { id: String } => "document {id} was modified concurrently",
    }
}

/// Read-only lookup over the news collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsIndex: Send + Sync {
    /// `_source` of the first document whose `_id` equals `id`.
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Value>, SearchIndexError>;
}

/// Chapter collection with optimistic concurrency on updates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChapterIndex: Send + Sync {
    /// Index a new document and return the id assigned by the index.
    async fn insert(&self, document: &ChapterDocument) -> Result<ChapterId, SearchIndexError>;

    /// Load a document with its revision token.
    async fn fetch(&self, id: &ChapterId) -> Result<Option<StoredChapter>, SearchIndexError>;

    /// Overwrite `id` only if it is still at `expected`.
    ///
    /// Returns [`SearchIndexError::VersionConflict`] otherwise.
    async fn replace(
        &self,
        id: &ChapterId,
        document: &ChapterDocument,
        expected: ChapterRevision,
    ) -> Result<(), SearchIndexError>;
}
