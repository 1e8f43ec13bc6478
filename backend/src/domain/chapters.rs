//! Chapter authoring service.
//!
//! Chapters live in the search index. Edits read the stored revision token
//! and write back conditionally, so two concurrent edits cannot both land.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{ChapterCommand, ChapterIndex, SearchIndexError};
use crate::domain::{
    ChapterCreated, ChapterDocument, ChapterDraft, ChapterEdit, ChapterEditOutcome, Error,
};

/// Chapter service implementing [`ChapterCommand`].
#[derive(Clone)]
pub struct ChapterService<I> {
    chapters: Arc<I>,
    clock: Arc<dyn Clock>,
}

impl<I> ChapterService<I> {
    /// Create a service over the chapter index.
    pub fn new(chapters: Arc<I>, clock: Arc<dyn Clock>) -> Self {
        Self { chapters, clock }
    }
}

pub(crate) fn map_index_error(error: SearchIndexError) -> Error {
    match error {
        SearchIndexError::Connection { message } => {
            Error::service_unavailable(format!("search index unavailable: {message}"))
        }
        other => Error::internal(other.to_string()),
    }
}

#[async_trait]
impl<I> ChapterCommand for ChapterService<I>
where
    I: ChapterIndex,
{
    async fn add_chapter(&self, draft: ChapterDraft) -> Result<ChapterCreated, Error> {
        let book_id = draft.book_id;
        let document = ChapterDocument::first_version(draft, self.clock.utc());
        let chapter_id = self
            .chapters
            .insert(&document)
            .await
            .map_err(map_index_error)?;
        info!(%chapter_id, bookid = book_id.get(), "chapter created");
        Ok(ChapterCreated { chapter_id })
    }

    async fn edit_chapter(&self, edit: ChapterEdit) -> Result<ChapterEditOutcome, Error> {
        let Some(stored) = self
            .chapters
            .fetch(&edit.chapter_id)
            .await
            .map_err(map_index_error)?
        else {
            return Ok(ChapterEditOutcome::NotFound);
        };

        let revised = stored.document.revise(&edit, self.clock.utc());
        let version = revised.chapterversion;
        match self
            .chapters
            .replace(&stored.id, &revised, stored.revision)
            .await
        {
            Ok(()) => {
                info!(chapter_id = %stored.id, version = version.get(), "chapter updated");
                Ok(ChapterEditOutcome::Updated { version })
            }
            Err(SearchIndexError::VersionConflict { id }) => {
                debug!(chapter_id = %id, "chapter edit lost a concurrent write");
                Ok(ChapterEditOutcome::Conflict)
            }
            Err(err) => Err(map_index_error(err)),
        }
    }
}
