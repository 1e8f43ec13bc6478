//! Chapter documents held in the search index.
//!
//! Chapters are versioned: the first indexed revision carries version 1 and
//! every accepted edit increments it. Writes back to the index are guarded by
//! a [`ChapterRevision`] token so concurrent edits cannot silently overwrite
//! each other.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a book referenced by a chapter; not checked against the
/// catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Wrap a raw book id.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }
}

/// Search-index document id of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChapterId(String);

/// Raised when a chapter id is blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("chapterid must not be empty")]
pub struct EmptyChapterId;

impl ChapterId {
    /// Validate and construct a [`ChapterId`].
    pub fn new(raw: impl Into<String>) -> Result<Self, EmptyChapterId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(EmptyChapterId);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for ChapterId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ChapterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monotonic chapter revision number, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChapterVersion(u32);

impl ChapterVersion {
    /// Version of a newly created chapter.
    pub const INITIAL: Self = Self(1);

    /// Version following `self`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Raw version number.
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Indexed chapter body. Field names are the index mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterDocument {
    pub chaptername: Option<String>,
    pub chapterabstract: Option<String>,
    pub chaptercontent: Option<String>,
    pub bookid: BookId,
    pub chapterversion: ChapterVersion,
    pub create_date: DateTime<Utc>,
    pub edit_date: DateTime<Utc>,
}

/// Inputs for a new chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDraft {
    pub book_id: BookId,
    pub name: Option<String>,
    pub abstract_text: Option<String>,
    pub content: Option<String>,
}

/// Fields to replace on an existing chapter; `None` keeps the stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEdit {
    pub chapter_id: ChapterId,
    pub name: Option<String>,
    pub abstract_text: Option<String>,
    pub content: Option<String>,
}

impl ChapterDocument {
    /// First revision of a chapter; both timestamps are `now`.
    pub fn first_version(draft: ChapterDraft, now: DateTime<Utc>) -> Self {
        let ChapterDraft {
            book_id,
            name,
            abstract_text,
            content,
        } = draft;
        Self {
            chaptername: name,
            chapterabstract: abstract_text,
            chaptercontent: content,
            bookid: book_id,
            chapterversion: ChapterVersion::INITIAL,
            create_date: now,
            edit_date: now,
        }
    }

    /// Next revision with `edit` applied; `create_date` is preserved.
    #[must_use]
    pub fn revise(self, edit: &ChapterEdit, now: DateTime<Utc>) -> Self {
        Self {
            chaptername: edit.name.clone().or(self.chaptername),
            chapterabstract: edit.abstract_text.clone().or(self.chapterabstract),
            chaptercontent: edit.content.clone().or(self.chaptercontent),
            bookid: self.bookid,
            chapterversion: self.chapterversion.next(),
            create_date: self.create_date,
            edit_date: now,
        }
    }
}

/// Optimistic concurrency token issued by the index for a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChapterRevision {
    pub seq_no: u64,
    pub primary_term: u64,
}

/// Chapter read back from the index together with its revision token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredChapter {
    pub id: ChapterId,
    pub document: ChapterDocument,
    pub revision: ChapterRevision,
}

/// Successful chapter creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterCreated {
    pub chapter_id: ChapterId,
}

/// Result of a chapter edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterEditOutcome {
    /// The edit was stored under the returned version.
    Updated { version: ChapterVersion },
    /// No chapter has the requested id.
    NotFound,
    /// Another writer stored a newer revision first.
    Conflict,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    #[fixture]
    fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    #[fixture]
    fn draft() -> ChapterDraft {
        ChapterDraft {
            book_id: BookId::new(7),
            name: Some("Prologue".to_owned()),
            abstract_text: Some("Where it begins".to_owned()),
            content: Some("It was a dark night.".to_owned()),
        }
    }

    #[rstest]
    fn first_version_starts_at_one_with_equal_timestamps(
        draft: ChapterDraft,
        created_at: DateTime<Utc>,
    ) {
        let doc = ChapterDocument::first_version(draft, created_at);
        assert_eq!(doc.chapterversion, ChapterVersion::INITIAL);
        assert_eq!(doc.create_date, doc.edit_date);
        assert_eq!(doc.bookid.get(), 7);
    }

    #[rstest]
    fn revise_bumps_version_and_keeps_untouched_fields(
        draft: ChapterDraft,
        created_at: DateTime<Utc>,
    ) {
        let doc = ChapterDocument::first_version(draft, created_at);
        let later = created_at + chrono::Duration::hours(2);
        let edit = ChapterEdit {
            chapter_id: ChapterId::new("c-1").expect("id"),
            name: None,
            abstract_text: None,
            content: Some("It was a stormy night.".to_owned()),
        };

        let revised = doc.revise(&edit, later);

        assert_eq!(revised.chapterversion.get(), 2);
        assert_eq!(revised.create_date, created_at);
        assert_eq!(revised.edit_date, later);
        assert_eq!(revised.chaptername.as_deref(), Some("Prologue"));
        assert_eq!(revised.chaptercontent.as_deref(), Some("It was a stormy night."));
    }

    #[rstest]
    fn document_serialises_with_index_field_names(draft: ChapterDraft, created_at: DateTime<Utc>) {
        let doc = ChapterDocument::first_version(draft, created_at);
        let value = serde_json::to_value(&doc).expect("serialise");
        assert_eq!(value["chapterversion"], 1);
        assert_eq!(value["bookid"], 7);
        assert_eq!(value["create_date"], "2024-01-01T09:00:00Z");
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn blank_chapter_ids_are_rejected(#[case] raw: &str) {
        assert_eq!(ChapterId::new(raw), Err(EmptyChapterId));
    }
}
