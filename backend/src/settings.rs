//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `BOOKSHELF_*` environment variables and an
//! optional config file, in increasing order of precedence. Absent backing
//! store URLs select in-memory adapters so the service can start without
//! external dependencies.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

use crate::domain::NodeId;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8888;
const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_NEWS_INDEX: &str = "news";
const DEFAULT_CHAPTER_INDEX: &str = "chapter";
const DEFAULT_NEO4J_USER: &str = "neo4j";
const DEFAULT_NEO4J_DATABASE: &str = "neo4j";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Errors raised when a configured value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A URL setting did not parse.
    #[error("{key} is not a valid URL: {message}")]
    InvalidUrl { key: &'static str, message: String },
}

/// Configuration values for the HTTP server and its backing stores.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOOKSHELF")]
pub struct AppSettings {
    /// Host interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub database_max_connections: Option<u32>,
    /// Skip applying embedded migrations at startup.
    #[ortho_config(default = false)]
    pub skip_migrations: bool,
    /// Elasticsearch base URL.
    pub elasticsearch_url: Option<String>,
    /// Index holding news documents.
    pub news_index: Option<String>,
    /// Index holding chapter documents.
    pub chapter_index: Option<String>,
    /// Neo4j HTTP endpoint base URL.
    pub neo4j_url: Option<String>,
    /// Neo4j basic-auth user.
    pub neo4j_user: Option<String>,
    /// Neo4j basic-auth password.
    pub neo4j_password: Option<String>,
    /// Neo4j database name.
    pub neo4j_database: Option<String>,
    /// Start node for the graph demo traversal.
    pub graph_demo_node: Option<i64>,
    /// Timeout applied to outbound HTTP requests, in seconds.
    pub request_timeout_secs: Option<u64>,
}

fn parse_url(key: &'static str, raw: Option<&str>) -> Result<Option<Url>, SettingsError> {
    raw.map(|value| {
        Url::parse(value).map_err(|err| SettingsError::InvalidUrl {
            key,
            message: err.to_string(),
        })
    })
    .transpose()
}

impl AppSettings {
    /// Bind host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Bind port, falling back to 8888.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Configured database URL, if any.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Pool size.
    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
            .unwrap_or(DEFAULT_MAX_CONNECTIONS)
    }

    /// Whether startup should apply pending migrations.
    pub fn run_migrations(&self) -> bool {
        !self.skip_migrations
    }

    /// Parsed Elasticsearch base URL.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidUrl`] when the value does not parse.
    pub fn elasticsearch_url(&self) -> Result<Option<Url>, SettingsError> {
        parse_url("elasticsearch_url", self.elasticsearch_url.as_deref())
    }

    /// News index name.
    pub fn news_index(&self) -> &str {
        self.news_index.as_deref().unwrap_or(DEFAULT_NEWS_INDEX)
    }

    /// Chapter index name.
    pub fn chapter_index(&self) -> &str {
        self.chapter_index
            .as_deref()
            .unwrap_or(DEFAULT_CHAPTER_INDEX)
    }

    /// Parsed Neo4j base URL.
    ///
    /// # Errors
    /// Returns [`SettingsError::InvalidUrl`] when the value does not parse.
    pub fn neo4j_url(&self) -> Result<Option<Url>, SettingsError> {
        parse_url("neo4j_url", self.neo4j_url.as_deref())
    }

    /// Neo4j user name.
    pub fn neo4j_user(&self) -> &str {
        self.neo4j_user.as_deref().unwrap_or(DEFAULT_NEO4J_USER)
    }

    /// Neo4j password, if configured.
    pub fn neo4j_password(&self) -> Option<&str> {
        self.neo4j_password.as_deref()
    }

    /// Neo4j database name.
    pub fn neo4j_database(&self) -> &str {
        self.neo4j_database
            .as_deref()
            .unwrap_or(DEFAULT_NEO4J_DATABASE)
    }

    /// Start node for the graph demo.
    pub fn graph_demo_node(&self) -> NodeId {
        self.graph_demo_node
            .map_or(NodeId::DEMO_DEFAULT, NodeId::new)
    }

    /// Outbound HTTP request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}
