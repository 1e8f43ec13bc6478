//! Reqwest-backed Elasticsearch adapter for the news and chapter indices.
//!
//! Only transport concerns live here: URL construction, status mapping and
//! JSON decoding. Chapter writes use `if_seq_no`/`if_primary_term` so a stale
//! revision is rejected by the index with 409.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde_json::Value;
use tracing::debug;

use super::dto::{GetResponseDto, IdSearchDto, IndexResponseDto, SearchResponseDto};
use crate::domain::ports::{ChapterIndex, NewsIndex, SearchIndexError};
use crate::domain::{ChapterDocument, ChapterId, ChapterRevision, DocumentId, StoredChapter};

/// Names of the indices the adapter reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndices {
    /// Read-only news collection.
    pub news: String,
    /// Versioned chapter collection.
    pub chapter: String,
}

impl Default for SearchIndices {
    fn default() -> Self {
        Self {
            news: "news".to_owned(),
            chapter: "chapter".to_owned(),
        }
    }
}

/// Elasticsearch client implementing [`NewsIndex`] and [`ChapterIndex`].
#[derive(Clone)]
pub struct ElasticsearchClient {
    client: Client,
    base: Url,
    indices: SearchIndices,
}

impl ElasticsearchClient {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, indices: SearchIndices, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base,
            indices,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SearchIndexError> {
        build_endpoint(&self.base, segments)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json")
    }
}

fn build_endpoint(base: &Url, segments: &[&str]) -> Result<Url, SearchIndexError> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().map_err(|()| {
            SearchIndexError::query(format!("elasticsearch url {base} cannot carry a path"))
        })?;
        path.pop_if_empty().extend(segments);
    }
    Ok(url)
}

async fn read_body(response: reqwest::Response) -> Result<(StatusCode, Vec<u8>), SearchIndexError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    Ok((status, body.to_vec()))
}

#[async_trait]
impl NewsIndex for ElasticsearchClient {
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Value>, SearchIndexError> {
        let url = self.endpoint(&[self.indices.news.as_str(), "_search"])?;
        let response = self
            .request(Method::POST, url)
            .json(&IdSearchDto::for_id(id.as_ref()))
            .send()
            .await
            .map_err(map_transport_error)?;

        let (status, body) = read_body(response).await?;
        if status == StatusCode::NOT_FOUND {
            debug!(index = %self.indices.news, "news index does not exist");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        parse_search(&body)
    }
}

#[async_trait]
impl ChapterIndex for ElasticsearchClient {
    async fn insert(&self, document: &ChapterDocument) -> Result<ChapterId, SearchIndexError> {
        let mut url = self.endpoint(&[self.indices.chapter.as_str(), "_doc"])?;
        url.query_pairs_mut().append_pair("refresh", "wait_for");
        let response = self
            .request(Method::POST, url)
            .json(document)
            .send()
            .await
            .map_err(map_transport_error)?;

        let (status, body) = read_body(response).await?;
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        let id = parse_index_reply(&body)?;
        debug!(chapter_id = %id, "chapter indexed");
        Ok(id)
    }

    async fn fetch(&self, id: &ChapterId) -> Result<Option<StoredChapter>, SearchIndexError> {
        let url = self.endpoint(&[self.indices.chapter.as_str(), "_doc", id.as_ref()])?;
        let response = self
            .request(Method::GET, url)
            .send()
            .await
            .map_err(map_transport_error)?;

        let (status, body) = read_body(response).await?;
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, &body));
        }
        parse_get(&body)
    }

    async fn replace(
        &self,
        id: &ChapterId,
        document: &ChapterDocument,
        expected: ChapterRevision,
    ) -> Result<(), SearchIndexError> {
        let mut url = self.endpoint(&[self.indices.chapter.as_str(), "_doc", id.as_ref()])?;
        url.query_pairs_mut()
            .append_pair("if_seq_no", &expected.seq_no.to_string())
            .append_pair("if_primary_term", &expected.primary_term.to_string())
            .append_pair("refresh", "wait_for");
        let response = self
            .request(Method::PUT, url)
            .json(document)
            .send()
            .await
            .map_err(map_transport_error)?;

        let (status, body) = read_body(response).await?;
        match status {
            StatusCode::CONFLICT => Err(SearchIndexError::version_conflict(id.as_ref())),
            _ if status.is_success() => Ok(()),
            _ => Err(map_status_error(status, &body)),
        }
    }
}

fn parse_search(body: &[u8]) -> Result<Option<Value>, SearchIndexError> {
    let decoded: SearchResponseDto = serde_json::from_slice(body).map_err(|error| {
        SearchIndexError::decode(format!("invalid search response: {error}"))
    })?;
    Ok(decoded.into_first_source())
}

fn parse_index_reply(body: &[u8]) -> Result<ChapterId, SearchIndexError> {
    let decoded: IndexResponseDto = serde_json::from_slice(body).map_err(|error| {
        SearchIndexError::decode(format!("invalid index response: {error}"))
    })?;
    ChapterId::new(decoded.id).map_err(|err| SearchIndexError::decode(err.to_string()))
}

fn parse_get(body: &[u8]) -> Result<Option<StoredChapter>, SearchIndexError> {
    let decoded: GetResponseDto = serde_json::from_slice(body).map_err(|error| {
        SearchIndexError::decode(format!("invalid document response: {error}"))
    })?;
    decoded.into_stored().map_err(SearchIndexError::decode)
}

fn map_transport_error(error: reqwest::Error) -> SearchIndexError {
    if error.is_decode() {
        return SearchIndexError::decode(error.to_string());
    }
    SearchIndexError::connection(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SearchIndexError {
    let message = format!("status {status}: {}", body_preview(body));
    match status {
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            SearchIndexError::connection(message)
        }
        _ => SearchIndexError::query(message),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
