//! Graph store port used by the demo traversal.
use async_trait::async_trait;

use crate::domain::{TraversalQuery, TraversalRows};

use super::define_port_error;

define_port_error! {
    /// Errors raised by graph store adapters.
    pub enum GraphStoreError {
        /// The store could not be reached or timed out.
        Connection { message: String } => "graph store connection failed: {message}",
        /// The store rejected the statement.
        Query { message: String } => "graph store query failed: {message}",
        /// The store answered with an unexpected payload.
        Decode { message: String } => "graph store response could not be decoded: {message}",
    }
}

/// Driven port running read-only traversals.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphStore: Send + Sync {
    /// Execute `query` and return its rows.
    async fn traverse(&self, query: &TraversalQuery) -> Result<TraversalRows, GraphStoreError>;
}
