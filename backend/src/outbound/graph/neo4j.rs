//! Reqwest-backed Neo4j adapter using the transactional Cypher endpoint.
//!
//! Each traversal is a single auto-committed transaction posted to
//! `{base}/db/{database}/tx/commit`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;
use zeroize::Zeroizing;

use super::dto::{CommitRequestDto, CommitResponseDto};
use crate::domain::ports::{GraphStore, GraphStoreError};
use crate::domain::{TraversalQuery, TraversalRows};

/// Basic-auth credentials for the graph store.
#[derive(Clone)]
pub struct Neo4jCredentials {
    pub user: String,
    pub password: Zeroizing<String>,
}

impl std::fmt::Debug for Neo4jCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Neo4jCredentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Graph store adapter posting Cypher statements over HTTP.
#[derive(Clone)]
pub struct Neo4jHttpGraphStore {
    client: Client,
    commit_url: Url,
    credentials: Neo4jCredentials,
}

impl Neo4jHttpGraphStore {
    /// Build an adapter for `database` on the server at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphStoreError::Connection`] when the reqwest client cannot
    /// be built and [`GraphStoreError::Query`] when `base` cannot carry a path.
    pub fn new(
        base: Url,
        database: &str,
        credentials: Neo4jCredentials,
        timeout: Duration,
    ) -> Result<Self, GraphStoreError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| GraphStoreError::connection(err.to_string()))?;
        let commit_url = commit_endpoint(&base, database)?;
        Ok(Self {
            client,
            commit_url,
            credentials,
        })
    }
}

fn commit_endpoint(base: &Url, database: &str) -> Result<Url, GraphStoreError> {
    let mut url = base.clone();
    {
        let mut path = url.path_segments_mut().map_err(|()| {
            GraphStoreError::query(format!("neo4j url {base} cannot carry a path"))
        })?;
        path.pop_if_empty().extend(["db", database, "tx", "commit"]);
    }
    Ok(url)
}

#[async_trait]
impl GraphStore for Neo4jHttpGraphStore {
    async fn traverse(&self, query: &TraversalQuery) -> Result<TraversalRows, GraphStoreError> {
        let response = self
            .client
            .post(self.commit_url.clone())
            .basic_auth(&self.credentials.user, Some(self.credentials.password.as_str()))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&CommitRequestDto::from(query))
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status));
        }
        let rows = parse_rows(body.as_ref())?;
        debug!(start = query.start().get(), rows = rows.rows().len(), "graph traversal finished");
        Ok(rows)
    }
}

fn parse_rows(body: &[u8]) -> Result<TraversalRows, GraphStoreError> {
    let decoded: CommitResponseDto = serde_json::from_slice(body).map_err(|error| {
        GraphStoreError::decode(format!("invalid neo4j response: {error}"))
    })?;
    decoded
        .into_rows()
        .map_err(|error| GraphStoreError::query(format!("{}: {}", error.code, error.message)))
}

fn map_transport_error(error: reqwest::Error) -> GraphStoreError {
    if error.is_decode() {
        return GraphStoreError::decode(error.to_string());
    }
    GraphStoreError::connection(error.to_string())
}

fn map_status_error(status: StatusCode) -> GraphStoreError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            GraphStoreError::query(format!("graph store rejected credentials ({status})"))
        }
        StatusCode::BAD_GATEWAY | StatusCode::SERVICE_UNAVAILABLE | StatusCode::GATEWAY_TIMEOUT => {
            GraphStoreError::connection(format!("graph store unavailable ({status})"))
        }
        _ => GraphStoreError::query(format!("graph store answered {status}")),
    }
}
