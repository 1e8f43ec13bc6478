//! Backend entry-point: loads settings, connects backing stores and serves
//! the REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use zeroize::Zeroizing;

use bookshelf::inbound::http::health::HealthState;
use bookshelf::outbound::graph::{Neo4jCredentials, Neo4jHttpGraphStore};
use bookshelf::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use bookshelf::outbound::search::{ElasticsearchClient, SearchIndices};
use bookshelf::settings::AppSettings;

use server::{ServerConfig, create_server};

fn startup_error(context: &str, error: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {error}"))
}

async fn connect_database(settings: &AppSettings) -> std::io::Result<Option<DbPool>> {
    let Some(url) = settings.database_url() else {
        return Ok(None);
    };
    let config = PoolConfig::new(url).with_max_size(settings.database_max_connections());
    info!(database = %config.redacted_url(), "connecting to database");

    if settings.run_migrations() {
        run_pending_migrations(url)
            .await
            .map_err(|err| startup_error("database migrations failed", err))?;
    }

    let pool = DbPool::new(config)
        .await
        .map_err(|err| startup_error("database pool failed", err))?;
    Ok(Some(pool))
}

fn connect_search(settings: &AppSettings) -> std::io::Result<Option<ElasticsearchClient>> {
    let Some(url) = settings
        .elasticsearch_url()
        .map_err(|err| startup_error("invalid settings", err))?
    else {
        return Ok(None);
    };
    info!(elasticsearch = %url, "using elasticsearch search index");
    let indices = SearchIndices {
        news: settings.news_index().to_owned(),
        chapter: settings.chapter_index().to_owned(),
    };
    ElasticsearchClient::new(url, indices, settings.request_timeout())
        .map(Some)
        .map_err(|err| startup_error("elasticsearch client failed", err))
}

fn connect_graph(settings: &AppSettings) -> std::io::Result<Option<Neo4jHttpGraphStore>> {
    let Some(url) = settings
        .neo4j_url()
        .map_err(|err| startup_error("invalid settings", err))?
    else {
        return Ok(None);
    };
    info!(neo4j = %url, "using neo4j graph store");
    let credentials = Neo4jCredentials {
        user: settings.neo4j_user().to_owned(),
        password: Zeroizing::new(settings.neo4j_password().unwrap_or_default().to_owned()),
    };
    Neo4jHttpGraphStore::new(
        url,
        settings.neo4j_database(),
        credentials,
        settings.request_timeout(),
    )
    .map(Some)
    .map_err(|err| startup_error("neo4j client failed", err))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| startup_error("failed to load settings", err))?;

    let config = ServerConfig::new(settings.host(), settings.port())
        .with_db_pool(connect_database(&settings).await?)
        .with_search(connect_search(&settings)?)
        .with_graph(connect_graph(&settings)?, settings.graph_demo_node());

    let health_state = web::Data::new(HealthState::new());
    info!(host = settings.host(), port = settings.port(), "starting server");
    create_server(health_state, config)?.await
}
