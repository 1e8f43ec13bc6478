//! HTTP server configuration object and helpers.

use bookshelf::domain::NodeId;
use bookshelf::outbound::graph::Neo4jHttpGraphStore;
use bookshelf::outbound::persistence::DbPool;
use bookshelf::outbound::search::ElasticsearchClient;

/// Builder-style configuration for creating the HTTP server.
///
/// Each backing store is optional; an absent store selects the in-memory
/// adapter, except for the graph store whose absence disables the demo.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) search: Option<ElasticsearchClient>,
    pub(crate) graph: Option<Neo4jHttpGraphStore>,
    pub(crate) graph_demo_node: NodeId,
}

impl ServerConfig {
    /// Bind to `host:port` with every store in memory.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            db_pool: None,
            search: None,
            graph: None,
            graph_demo_node: NodeId::DEMO_DEFAULT,
        }
    }

    /// Attach a database connection pool for the credential and book stores.
    #[must_use]
    pub fn with_db_pool(mut self, pool: Option<DbPool>) -> Self {
        self.db_pool = pool;
        self
    }

    /// Attach an Elasticsearch client for the news and chapter indices.
    #[must_use]
    pub fn with_search(mut self, search: Option<ElasticsearchClient>) -> Self {
        self.search = search;
        self
    }

    /// Attach a graph store and the node the demo traversal starts from.
    #[must_use]
    pub fn with_graph(mut self, graph: Option<Neo4jHttpGraphStore>, start: NodeId) -> Self {
        self.graph = graph;
        self.graph_demo_node = start;
        self
    }
}
