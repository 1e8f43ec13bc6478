//! Elasticsearch outbound adapters.
//!
//! A single HTTP client serves both the read-only news lookup and the
//! versioned chapter collection.

mod dto;
mod elasticsearch;

pub use elasticsearch::{ElasticsearchClient, SearchIndices};
