//! Driving port for the graph demo endpoint.

use async_trait::async_trait;

use crate::domain::{Error, TraversalRows};

/// Domain use-case port running the fixed demo traversal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GraphDemoQuery: Send + Sync {
    /// Neighbours of the configured start node.
    async fn run_demo(&self) -> Result<TraversalRows, Error>;
}

/// Stand-in used when no graph store is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredGraphDemo;

#[async_trait]
impl GraphDemoQuery for UnconfiguredGraphDemo {
    async fn run_demo(&self) -> Result<TraversalRows, Error> {
        Err(Error::service_unavailable("graph store is not configured"))
    }
}
