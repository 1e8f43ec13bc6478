//! News detail lookup service.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::chapters::map_index_error;
use crate::domain::ports::{NewsDetailQuery, NewsIndex};
use crate::domain::{DocumentId, Error};

/// Service implementing [`NewsDetailQuery`] over a [`NewsIndex`].
#[derive(Clone)]
pub struct NewsDetailService<I> {
    news: Arc<I>,
}

impl<I> NewsDetailService<I> {
    /// Create a service over `news`.
    pub fn new(news: Arc<I>) -> Self {
        Self { news }
    }
}

#[async_trait]
impl<I> NewsDetailQuery for NewsDetailService<I>
where
    I: NewsIndex,
{
    async fn detail(&self, id: &DocumentId) -> Result<Value, Error> {
        self.news
            .find_by_id(id)
            .await
            .map_err(map_index_error)?
            .ok_or_else(|| {
                Error::not_found(format!("no news document with id {id}"))
                    .with_details(serde_json::json!({ "eid": id.as_ref() }))
            })
    }
}
