//! Neo4j outbound adapter for the graph demo traversal.

mod dto;
mod neo4j;

pub use neo4j::{Neo4jCredentials, Neo4jHttpGraphStore};
