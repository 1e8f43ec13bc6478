//! Bookshelf backend library modules.
//!
//! The crate follows a hexagonal layout: [`domain`] owns entities, ports and
//! services; [`inbound`] adapts HTTP requests onto driving ports;
//! [`outbound`] implements driven ports over PostgreSQL, Elasticsearch,
//! Neo4j and in-memory stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;
#[cfg(test)]
pub(crate) mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
