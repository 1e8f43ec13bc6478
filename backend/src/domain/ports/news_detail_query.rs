//! Driving port for news detail lookups.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{DocumentId, Error};

/// Domain use-case port returning a news document body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsDetailQuery: Send + Sync {
    /// `_source` of the document `id`; [`crate::domain::ErrorCode::NotFound`]
    /// when absent.
    async fn detail(&self, id: &DocumentId) -> Result<Value, Error>;
}
