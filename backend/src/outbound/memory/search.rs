//! In-memory news and chapter collections.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::ports::{ChapterIndex, NewsIndex, SearchIndexError};
use crate::domain::{ChapterDocument, ChapterId, ChapterRevision, DocumentId, StoredChapter};

use super::POISONED;

/// Every revision issued here shares a single primary term.
const PRIMARY_TERM: u64 = 1;

#[derive(Debug, Default)]
struct Collections {
    news: HashMap<String, Value>,
    chapters: HashMap<ChapterId, (ChapterDocument, u64)>,
    last_seq_no: u64,
}

impl Collections {
    fn next_seq_no(&mut self) -> u64 {
        self.last_seq_no += 1;
        self.last_seq_no
    }
}

/// Search index double implementing [`NewsIndex`] and [`ChapterIndex`].
///
/// Chapter ids are random UUIDs. Each write takes the next sequence number,
/// so a replace against an older revision fails with
/// [`SearchIndexError::VersionConflict`] as it would against Elasticsearch.
#[derive(Debug, Default)]
pub struct InMemorySearchIndex {
    inner: Mutex<Collections>,
}

impl InMemorySearchIndex {
    /// Empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `source` as the news document `id`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SearchIndexError::Query`] if the lock is poisoned.
    pub fn put_news(&self, id: impl Into<String>, source: Value) -> Result<(), SearchIndexError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| SearchIndexError::query(POISONED))?;
        inner.news.insert(id.into(), source);
        Ok(())
    }
}

#[async_trait]
impl NewsIndex for InMemorySearchIndex {
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Value>, SearchIndexError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| SearchIndexError::query(POISONED))?;
        Ok(inner.news.get(id.as_ref()).cloned())
    }
}

#[async_trait]
impl ChapterIndex for InMemorySearchIndex {
    async fn insert(&self, document: &ChapterDocument) -> Result<ChapterId, SearchIndexError> {
        let id = ChapterId::new(Uuid::new_v4().simple().to_string())
            .map_err(|err| SearchIndexError::query(err.to_string()))?;
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| SearchIndexError::query(POISONED))?;
        let seq_no = inner.next_seq_no();
        inner.chapters.insert(id.clone(), (document.clone(), seq_no));
        Ok(id)
    }

    async fn fetch(&self, id: &ChapterId) -> Result<Option<StoredChapter>, SearchIndexError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| SearchIndexError::query(POISONED))?;
        Ok(inner
            .chapters
            .get(id)
            .map(|(document, seq_no)| StoredChapter {
                id: id.clone(),
                document: document.clone(),
                revision: ChapterRevision {
                    seq_no: *seq_no,
                    primary_term: PRIMARY_TERM,
                },
            }))
    }

    async fn replace(
        &self,
        id: &ChapterId,
        document: &ChapterDocument,
        expected: ChapterRevision,
    ) -> Result<(), SearchIndexError> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| SearchIndexError::query(POISONED))?;
        let current = inner.chapters.get(id).map(|(_, seq_no)| *seq_no);
        let is_current = current == Some(expected.seq_no) && expected.primary_term == PRIMARY_TERM;
        if !is_current {
            return Err(SearchIndexError::version_conflict(id.as_ref()));
        }
        let seq_no = inner.next_seq_no();
        inner.chapters.insert(id.clone(), (document.clone(), seq_no));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookId, ChapterDraft, ChapterEdit};
    use chrono::{TimeZone, Utc};
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn document() -> ChapterDocument {
        let at = Utc
            .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp");
        ChapterDocument::first_version(
            ChapterDraft {
                book_id: BookId::new(1),
                name: Some("One".to_owned()),
                abstract_text: None,
                content: None,
            },
            at,
        )
    }

    fn edit(id: &ChapterId) -> ChapterEdit {
        ChapterEdit {
            chapter_id: id.clone(),
            name: Some("Two".to_owned()),
            abstract_text: None,
            content: None,
        }
    }

    #[rstest]
    #[tokio::test]
    async fn seeded_news_is_returned_verbatim() {
        let index = InMemorySearchIndex::new();
        index
            .put_news("n-1", json!({ "title": "Launch", "tags": ["a"] }))
            .expect("seed");

        let found = index
            .find_by_id(&DocumentId::new("n-1").expect("id"))
            .await
            .expect("lookup");

        assert_eq!(found, Some(json!({ "title": "Launch", "tags": ["a"] })));
    }

    #[rstest]
    #[tokio::test]
    async fn replace_with_current_revision_succeeds(document: ChapterDocument) {
        let index = InMemorySearchIndex::new();
        let id = index.insert(&document).await.expect("insert");
        let stored = index.fetch(&id).await.expect("fetch").expect("present");

        let revised = stored.document.clone().revise(&edit(&id), Utc::now());
        index
            .replace(&id, &revised, stored.revision)
            .await
            .expect("replace");

        let reread = index.fetch(&id).await.expect("fetch").expect("present");
        assert_eq!(reread.document.chapterversion.get(), 2);
        assert_ne!(reread.revision, stored.revision);
    }

    #[rstest]
    #[tokio::test]
    async fn replace_with_stale_revision_conflicts(document: ChapterDocument) {
        let index = InMemorySearchIndex::new();
        let id = index.insert(&document).await.expect("insert");
        let stale = index.fetch(&id).await.expect("fetch").expect("present");
        index
            .replace(&id, &document, stale.revision)
            .await
            .expect("first writer wins");

        let err = index
            .replace(&id, &document, stale.revision)
            .await
            .expect_err("second writer loses");

        assert_eq!(err, SearchIndexError::version_conflict(id.as_ref()));
    }

    #[rstest]
    #[tokio::test]
    async fn unknown_chapters_are_absent() {
        let index = InMemorySearchIndex::new();
        let id = ChapterId::new("missing").expect("id");
        assert_eq!(index.fetch(&id).await.expect("fetch"), None);
    }
}
