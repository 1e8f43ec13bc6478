//! Driving port for chapter writes.

use async_trait::async_trait;

use crate::domain::{ChapterCreated, ChapterDraft, ChapterEdit, ChapterEditOutcome, Error};

/// Domain use-case port for creating and revising chapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChapterCommand: Send + Sync {
    /// Index a new chapter at version 1.
    async fn add_chapter(&self, draft: ChapterDraft) -> Result<ChapterCreated, Error>;

    /// Apply `edit` to an existing chapter and bump its version.
    async fn edit_chapter(&self, edit: ChapterEdit) -> Result<ChapterEditOutcome, Error>;
}
