//! Fixed-traversal graph demo.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{GraphDemoQuery, GraphStore, GraphStoreError};
use crate::domain::{Error, NodeId, TraversalQuery, TraversalRows};

/// Runs the neighbours-of traversal from a configured start node.
#[derive(Clone)]
pub struct GraphDemoService<G> {
    graph: Arc<G>,
    start: NodeId,
}

impl<G> GraphDemoService<G> {
    /// Create a service traversing from `start`.
    pub fn new(graph: Arc<G>, start: NodeId) -> Self {
        Self { graph, start }
    }
}

fn map_graph_error(error: GraphStoreError) -> Error {
    match error {
        GraphStoreError::Connection { message } => {
            Error::service_unavailable(format!("graph store unavailable: {message}"))
        }
        other => Error::internal(other.to_string()),
    }
}

#[async_trait]
impl<G> GraphDemoQuery for GraphDemoService<G>
where
    G: GraphStore,
{
    async fn run_demo(&self) -> Result<TraversalRows, Error> {
        let query = TraversalQuery::neighbours_of(self.start);
        self.graph.traverse(&query).await.map_err(map_graph_error)
    }
}
