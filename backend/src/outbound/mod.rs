//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL credential and book stores using Diesel ORM
//! - **search**: Elasticsearch news and chapter indices over HTTP
//! - **graph**: Neo4j traversal over the transactional HTTP endpoint
//! - **memory**: in-process stand-ins used when a store is not configured
//!
//! Adapters translate between domain types and infrastructure payloads. They
//! contain no business logic.

pub mod graph;
pub mod memory;
pub mod persistence;
pub mod search;
