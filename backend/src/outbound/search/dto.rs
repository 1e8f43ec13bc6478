//! Transport DTOs for Elasticsearch document and search responses.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{ChapterDocument, ChapterId, ChapterRevision, StoredChapter};

/// Body of a `_search` request matching a single `_id`.
#[derive(Debug, Serialize)]
pub(super) struct IdSearchDto<'a> {
    pub(super) size: u8,
    pub(super) query: IdQueryDto<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct IdQueryDto<'a> {
    pub(super) term: IdTermDto<'a>,
}

#[derive(Debug, Serialize)]
pub(super) struct IdTermDto<'a> {
    #[serde(rename = "_id")]
    pub(super) id: &'a str,
}

impl<'a> IdSearchDto<'a> {
    pub(super) fn for_id(id: &'a str) -> Self {
        Self {
            size: 1,
            query: IdQueryDto {
                term: IdTermDto { id },
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    pub(super) hits: HitsDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct HitsDto {
    #[serde(default)]
    pub(super) hits: Vec<HitDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct HitDto {
    #[serde(rename = "_source")]
    pub(super) source: Value,
}

impl SearchResponseDto {
    pub(super) fn into_first_source(self) -> Option<Value> {
        self.hits.hits.into_iter().next().map(|hit| hit.source)
    }
}

/// Reply to an index (create) request.
#[derive(Debug, Deserialize)]
pub(super) struct IndexResponseDto {
    #[serde(rename = "_id")]
    pub(super) id: String,
}

/// Reply to a `GET _doc/{id}` request.
#[derive(Debug, Deserialize)]
pub(super) struct GetResponseDto {
    #[serde(rename = "_id")]
    pub(super) id: String,
    #[serde(default)]
    pub(super) found: bool,
    #[serde(rename = "_seq_no")]
    pub(super) seq_no: Option<u64>,
    #[serde(rename = "_primary_term")]
    pub(super) primary_term: Option<u64>,
    #[serde(rename = "_source")]
    pub(super) source: Option<ChapterDocument>,
}

impl GetResponseDto {
    pub(super) fn into_stored(self) -> Result<Option<StoredChapter>, String> {
        if !self.found {
            return Ok(None);
        }
        let (Some(seq_no), Some(primary_term)) = (self.seq_no, self.primary_term) else {
            return Err(format!("document {} has no revision metadata", self.id));
        };
        let document = self
            .source
            .ok_or_else(|| format!("document {} has no _source", self.id))?;
        let id = ChapterId::new(self.id).map_err(|err| err.to_string())?;
        Ok(Some(StoredChapter {
            id,
            document,
            revision: ChapterRevision {
                seq_no,
                primary_term,
            },
        }))
    }
}
